//! Seed dataset written on first run.
//!
//! Recipes and the owner user record are persisted by
//! [`Catalog::initialize`](crate::catalog::Catalog::initialize) when their
//! keys are absent. Categories are fixed data exposed directly; they are
//! not a persisted collection.

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::types::{Category, Difficulty, Ingredient, Recipe, User, UserRole};

struct SeedRecipe {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    cuisine: &'static str,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    difficulty: Difficulty,
    ingredients: &'static [(&'static str, &'static str, &'static str)], // (name, amount, unit)
    instructions: &'static [&'static str],
    image_url: &'static str,
    image_gallery: &'static [&'static str],
    created_at: &'static str,
    rating: f64,
    review_count: u32,
    view_count: u64,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        id: "1",
        title: "Decadent Chocolate Lava Cake",
        description: "Rich, molten chocolate cake with a gooey center that flows like lava when cut. Perfect for special occasions and chocolate lovers.",
        category: "Desserts",
        cuisine: "French",
        prep_time: 20,
        cook_time: 12,
        servings: 4,
        difficulty: Difficulty::Medium,
        ingredients: &[
            ("Dark chocolate", "200", "g"),
            ("Butter", "200", "g"),
            ("Eggs", "4", "large"),
            ("Sugar", "100", "g"),
            ("All-purpose flour", "50", "g"),
            ("Vanilla extract", "1", "tsp"),
            ("Butter for ramekins", "2", "tbsp"),
            ("Cocoa powder", "2", "tbsp"),
        ],
        instructions: &[
            "Preheat oven to 425°F (220°C). Butter 4 ramekins and dust with cocoa powder.",
            "Melt chocolate and butter in a double boiler until smooth.",
            "In a bowl, whisk eggs and sugar until thick and pale.",
            "Fold in the melted chocolate mixture and vanilla.",
            "Sift in flour and fold gently until just combined.",
            "Divide batter among prepared ramekins.",
            "Bake for 12-14 minutes until edges are firm but centers jiggle slightly.",
            "Let cool for 1 minute, then run a knife around edges and invert onto plates.",
            "Serve immediately with vanilla ice cream and fresh berries.",
        ],
        image_url: "https://images.pexels.com/photos/291528/pexels-photo-291528.jpeg?auto=compress&cs=tinysrgb&w=800",
        image_gallery: &[
            "https://images.pexels.com/photos/291528/pexels-photo-291528.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/4110256/pexels-photo-4110256.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/4110007/pexels-photo-4110007.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
        created_at: "2024-01-15T10:00:00Z",
        rating: 4.9,
        review_count: 156,
        view_count: 3247,
    },
    SeedRecipe {
        id: "2",
        title: "Authentic Margherita Pizza",
        description: "Classic Italian pizza with San Marzano tomatoes, fresh mozzarella di bufala, and aromatic basil leaves on a perfectly crispy crust.",
        category: "Main Course",
        cuisine: "Italian",
        prep_time: 30,
        cook_time: 15,
        servings: 4,
        difficulty: Difficulty::Medium,
        ingredients: &[
            ("Pizza dough", "500", "g"),
            ("San Marzano tomatoes", "400", "g"),
            ("Fresh mozzarella di bufala", "250", "g"),
            ("Fresh basil leaves", "20", "pieces"),
            ("Extra virgin olive oil", "3", "tbsp"),
            ("Sea salt", "1", "tsp"),
            ("Garlic", "2", "cloves"),
            ("Oregano", "1", "tsp"),
        ],
        instructions: &[
            "Preheat oven to 500°F (260°C) with pizza stone inside.",
            "Crush tomatoes by hand and season with salt, garlic, and oregano.",
            "Roll out pizza dough on floured surface to 12-inch circle.",
            "Transfer dough to parchment paper.",
            "Spread tomato sauce evenly, leaving 1-inch border.",
            "Tear mozzarella into chunks and distribute over sauce.",
            "Drizzle with olive oil and sprinkle with salt.",
            "Slide pizza onto hot stone and bake 10-12 minutes.",
            "Remove when crust is golden and cheese is bubbly.",
            "Top with fresh basil leaves and serve immediately.",
        ],
        image_url: "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=800",
        image_gallery: &[
            "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/2147491/pexels-photo-2147491.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
        created_at: "2024-01-14T14:30:00Z",
        rating: 4.8,
        review_count: 203,
        view_count: 4521,
    },
    SeedRecipe {
        id: "3",
        title: "Rainbow Buddha Bowl",
        description: "Vibrant, nutrient-packed bowl with quinoa, roasted vegetables, avocado, and creamy tahini dressing. A complete meal in a bowl.",
        category: "Healthy",
        cuisine: "Mediterranean",
        prep_time: 25,
        cook_time: 30,
        servings: 2,
        difficulty: Difficulty::Easy,
        ingredients: &[
            ("Quinoa", "1", "cup"),
            ("Sweet potato", "1", "large"),
            ("Chickpeas", "1", "can"),
            ("Kale", "2", "cups"),
            ("Red cabbage", "1", "cup"),
            ("Carrots", "2", "medium"),
            ("Avocado", "1", "large"),
            ("Tahini", "3", "tbsp"),
            ("Lemon juice", "2", "tbsp"),
            ("Maple syrup", "1", "tbsp"),
            ("Olive oil", "2", "tbsp"),
            ("Pumpkin seeds", "2", "tbsp"),
        ],
        instructions: &[
            "Preheat oven to 400°F (200°C).",
            "Cook quinoa according to package directions.",
            "Cube sweet potato and toss with olive oil and salt.",
            "Roast sweet potato for 25-30 minutes until tender.",
            "Drain and rinse chickpeas, then roast for 20 minutes.",
            "Massage kale with a bit of olive oil until softened.",
            "Shred red cabbage and julienne carrots.",
            "Whisk tahini, lemon juice, maple syrup, and water for dressing.",
            "Assemble bowls with quinoa as base.",
            "Arrange vegetables in colorful sections.",
            "Top with sliced avocado and pumpkin seeds.",
            "Drizzle with tahini dressing and serve.",
        ],
        image_url: "https://images.pexels.com/photos/1640772/pexels-photo-1640772.jpeg?auto=compress&cs=tinysrgb&w=800",
        image_gallery: &[
            "https://images.pexels.com/photos/1640772/pexels-photo-1640772.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/1566837/pexels-photo-1566837.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
        created_at: "2024-01-13T09:15:00Z",
        rating: 4.7,
        review_count: 189,
        view_count: 3821,
    },
    SeedRecipe {
        id: "4",
        title: "Spicy Thai Green Curry",
        description: "Aromatic and creamy Thai curry with tender chicken, fresh vegetables, and coconut milk. Bursting with authentic Thai flavors.",
        category: "Main Course",
        cuisine: "Asian",
        prep_time: 20,
        cook_time: 25,
        servings: 4,
        difficulty: Difficulty::Medium,
        ingredients: &[
            ("Green curry paste", "3", "tbsp"),
            ("Coconut milk", "400", "ml"),
            ("Chicken breast", "500", "g"),
            ("Thai eggplant", "2", "pieces"),
            ("Bell peppers", "2", "pieces"),
            ("Thai basil", "1", "cup"),
            ("Fish sauce", "2", "tbsp"),
            ("Palm sugar", "1", "tbsp"),
            ("Kaffir lime leaves", "4", "pieces"),
            ("Thai chilies", "2", "pieces"),
            ("Jasmine rice", "2", "cups"),
        ],
        instructions: &[
            "Cook jasmine rice according to package directions.",
            "Heat oil in a wok over medium-high heat.",
            "Add curry paste and fry for 2 minutes until fragrant.",
            "Add thick coconut milk and stir until combined.",
            "Add sliced chicken and cook until nearly done.",
            "Add eggplant and bell peppers.",
            "Pour in remaining coconut milk.",
            "Season with fish sauce and palm sugar.",
            "Add lime leaves and chilies.",
            "Simmer until vegetables are tender.",
            "Garnish with Thai basil and serve with rice.",
        ],
        image_url: "https://images.pexels.com/photos/2474661/pexels-photo-2474661.jpeg?auto=compress&cs=tinysrgb&w=800",
        image_gallery: &[
            "https://images.pexels.com/photos/2474661/pexels-photo-2474661.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/769969/pexels-photo-769969.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/1410235/pexels-photo-1410235.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
        created_at: "2024-01-12T16:45:00Z",
        rating: 4.6,
        review_count: 267,
        view_count: 5234,
    },
    SeedRecipe {
        id: "5",
        title: "Artisan Sourdough Bread",
        description: "Handcrafted sourdough with a perfect crust and airy crumb. Made with wild yeast starter for complex flavors.",
        category: "Baking",
        cuisine: "European",
        prep_time: 30,
        cook_time: 45,
        servings: 8,
        difficulty: Difficulty::Hard,
        ingredients: &[
            ("Sourdough starter", "100", "g"),
            ("Bread flour", "500", "g"),
            ("Water", "350", "ml"),
            ("Sea salt", "10", "g"),
            ("Olive oil", "1", "tbsp"),
        ],
        instructions: &[
            "Mix starter with water until dissolved.",
            "Add flour and mix until shaggy dough forms.",
            "Rest for 30 minutes (autolyse).",
            "Add salt and knead until smooth.",
            "First rise: 4-6 hours with folds every 30 minutes.",
            "Shape into boule and place in banneton.",
            "Second rise: overnight in refrigerator.",
            "Preheat Dutch oven to 450°F (230°C).",
            "Score dough and bake covered 20 minutes.",
            "Remove lid and bake 20-25 minutes until golden.",
            "Cool completely before slicing.",
        ],
        image_url: "https://images.pexels.com/photos/209206/pexels-photo-209206.jpeg?auto=compress&cs=tinysrgb&w=800",
        image_gallery: &[],
        created_at: "2024-01-11T08:30:00Z",
        rating: 4.9,
        review_count: 134,
        view_count: 2876,
    },
    SeedRecipe {
        id: "6",
        title: "Gourmet Beef Tacos",
        description: "Elevated street tacos with perfectly seasoned beef, fresh toppings, and homemade salsa verde.",
        category: "Main Course",
        cuisine: "Mexican",
        prep_time: 25,
        cook_time: 20,
        servings: 6,
        difficulty: Difficulty::Easy,
        ingredients: &[
            ("Corn tortillas", "12", "pieces"),
            ("Beef chuck roast", "600", "g"),
            ("White onion", "1", "large"),
            ("Cilantro", "1", "bunch"),
            ("Lime", "3", "pieces"),
            ("Tomatillos", "500", "g"),
            ("Jalapeño", "2", "pieces"),
            ("Mexican crema", "½", "cup"),
            ("Queso fresco", "200", "g"),
            ("Cumin", "1", "tsp"),
            ("Chili powder", "2", "tsp"),
        ],
        instructions: &[
            "Season beef with cumin, chili powder, salt, and pepper.",
            "Sear beef in hot pan until browned on all sides.",
            "Slow cook beef until tender and shreddable.",
            "Char tomatillos and jalapeños for salsa verde.",
            "Blend charred vegetables with cilantro and lime.",
            "Warm tortillas on griddle until lightly charred.",
            "Shred the cooked beef.",
            "Dice onion and chop cilantro finely.",
            "Assemble tacos with beef, onion, and cilantro.",
            "Top with crema, queso fresco, and salsa verde.",
            "Serve with lime wedges.",
            "Enjoy immediately while warm.",
        ],
        image_url: "https://images.pexels.com/photos/2456435/pexels-photo-2456435.jpeg?auto=compress&cs=tinysrgb&w=800",
        image_gallery: &[
            "https://images.pexels.com/photos/2456435/pexels-photo-2456435.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/4958792/pexels-photo-4958792.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/5737241/pexels-photo-5737241.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
        created_at: "2024-01-10T19:15:00Z",
        rating: 4.8,
        review_count: 198,
        view_count: 4123,
    },
];

const SAMPLE_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    (
        "1",
        "Desserts",
        "Sweet treats and indulgent pastries",
        "https://images.pexels.com/photos/291528/pexels-photo-291528.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "2",
        "Main Course",
        "Hearty meals and dinner dishes",
        "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "3",
        "Healthy",
        "Nutritious and wholesome recipes",
        "https://images.pexels.com/photos/1640772/pexels-photo-1640772.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "4",
        "Baking",
        "Artisan breads and baked goods",
        "https://images.pexels.com/photos/209206/pexels-photo-209206.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "5",
        "Quick & Easy",
        "Simple recipes under 30 minutes",
        "https://images.pexels.com/photos/769969/pexels-photo-769969.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "6",
        "Vegetarian",
        "Plant-based delicious meals",
        "https://images.pexels.com/photos/1566837/pexels-photo-1566837.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
];

/// The seeded owner account id.
pub const OWNER_USER_ID: &str = "admin";

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or(DateTime::UNIX_EPOCH)
}

/// The fixed sample recipes written on first run.
pub fn sample_recipes(config: &AppConfig) -> Vec<Recipe> {
    SAMPLE_RECIPES
        .iter()
        .map(|seed| Recipe {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            cuisine: seed.cuisine.to_string(),
            prep_time: seed.prep_time,
            cook_time: seed.cook_time,
            servings: seed.servings,
            difficulty: seed.difficulty,
            ingredients: seed
                .ingredients
                .iter()
                .map(|(name, amount, unit)| Ingredient {
                    name: name.to_string(),
                    amount: amount.to_string(),
                    unit: unit.to_string(),
                })
                .collect(),
            instructions: seed.instructions.iter().map(|s| s.to_string()).collect(),
            image_url: seed.image_url.to_string(),
            image_gallery: if seed.image_gallery.is_empty() {
                None
            } else {
                Some(seed.image_gallery.iter().map(|s| s.to_string()).collect())
            },
            author_id: OWNER_USER_ID.to_string(),
            author_name: config.owner.name.clone(),
            created_at: ts(seed.created_at),
            updated_at: ts(seed.created_at),
            approved: true,
            rating: seed.rating,
            review_count: seed.review_count,
            view_count: seed.view_count,
        })
        .collect()
}

/// The fixed browsing categories.
pub fn sample_categories() -> Vec<Category> {
    SAMPLE_CATEGORIES
        .iter()
        .map(|(id, name, description, image_url)| Category {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            recipe_count: None,
        })
        .collect()
}

/// The owner's user record, seeded when the users collection is absent.
pub fn owner_user(config: &AppConfig) -> User {
    User {
        id: OWNER_USER_ID.to_string(),
        email: config.owner.email.clone(),
        name: config.owner.name.clone(),
        phone: Some(config.owner.phone.clone()),
        role: UserRole::Admin,
        avatar_url: Some(config.owner.avatar_url.clone()),
        created_at: ts("2024-01-01T00:00:00Z"),
    }
}
