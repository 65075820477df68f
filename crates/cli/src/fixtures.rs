//! Built-in category fixtures

use uneaten_core::Category;

/// The flat two-category list.
pub fn flat_categories() -> Vec<Category> {
    vec![
        Category::new("chickenKey", "chicken"),
        Category::new("saladKey", "salad"),
    ]
}

/// Standalone fish/shellfish plus the grouped meat and milky trees.
pub fn grouped_categories() -> Vec<Category> {
    vec![
        Category::new("fishKey", "Fish"),
        Category::new("shellfishKey", "Shellfish"),
        Category::with_subcategories(
            "meatKey",
            "meats",
            vec![
                Category::new("beefKey", "beef"),
                Category::new("turkeyKey", "turkey"),
                Category::new("chickenKey", "chicken"),
                Category::new("lambKey", "lamb"),
            ],
        ),
        Category::with_subcategories(
            "milkyKey",
            "milky stuff",
            vec![
                Category::new("cheeseKey", "cheese"),
                Category::new("butterKey", "butter"),
            ],
        ),
    ]
}
