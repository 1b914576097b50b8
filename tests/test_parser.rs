use recipe_pages::{parse_file, parse_recipe, GenerateError, Locale, ParsedRecipe};

#[test]
fn test_shnitzel_example() {
    let text =
        "Shnitzel\nIngredients\n- Egg\n- Flour\n\nInstructions\nMix well.\n\nFry until golden.\n";

    assert_eq!(
        parse_recipe(text),
        ParsedRecipe {
            title: "Shnitzel".to_string(),
            ingredients: vec!["Egg".to_string(), "Flour".to_string()],
            instructions: vec!["Mix well.".to_string(), "Fry until golden.".to_string()],
            description: String::new(),
        }
    );
}

#[test]
fn test_headers_in_any_order() {
    let text = "\
Lemonade
Description
Cold and sour.
Great in summer.
Instructions
Squeeze the lemons.

Add sugar and water.
Ingredients
• 4 lemons
• 1 cup sugar
";
    let recipe = parse_recipe(text);

    assert_eq!(recipe.title, "Lemonade");
    assert_eq!(recipe.description, "Cold and sour.\nGreat in summer.");
    assert_eq!(
        recipe.instructions,
        vec!["Squeeze the lemons.", "Add sugar and water."]
    );
    assert_eq!(recipe.ingredients, vec!["4 lemons", "1 cup sugar"]);
}

#[test]
fn test_hebrew_headers() {
    let text = "\
שניצל
תיאור
שניצל פריך וזהוב.
מצרכים
- ביצה
- קמח
אופן ההכנה
לטבול בביצה.
טיפ: להוסיף מלח.

לטגן עד להזהבה.
";
    let recipe = parse_recipe(text);

    assert_eq!(recipe.title, "שניצל");
    assert_eq!(recipe.description, "שניצל פריך וזהוב.");
    assert_eq!(recipe.ingredients, vec!["ביצה", "קמח"]);
    assert_eq!(
        recipe.instructions,
        vec!["לטבול בביצה.\nטיפ: להוסיף מלח.", "לטגן עד להזהבה."]
    );
}

#[test]
fn test_no_recognized_headers() {
    let text = "Toast\ningredients:\nbread\n\nINSTRUCTIONS\ntoast it\n";
    let recipe = parse_recipe(text);

    assert_eq!(recipe.title, "Toast");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.instructions.is_empty());
    assert_eq!(recipe.description, "");
}

#[test]
fn test_headers_match_after_trim_only() {
    let text = "Rice\n   Ingredients\t\nrice\nwater\nInstructions \nBoil.\n";
    let recipe = parse_recipe(text);

    assert_eq!(recipe.ingredients, vec!["rice", "water"]);
    assert_eq!(recipe.instructions, vec!["Boil."]);
}

#[test]
fn test_title_is_first_line_even_if_blank() {
    let recipe = parse_recipe("\nIngredients\nsalt\n");
    assert_eq!(recipe.title, "");
    assert_eq!(recipe.ingredients, vec!["salt"]);
}

#[test]
fn test_ingredient_order_and_inner_characters_preserved() {
    let text = "Salad\nIngredients\n- extra-virgin olive oil\n-\n• salt • pepper\n\t- 1/2 lemon -\n";
    let recipe = parse_recipe(text);

    assert_eq!(
        recipe.ingredients,
        vec!["extra-virgin olive oil", "salt • pepper", "1/2 lemon"]
    );
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Nothing_en.txt");

    match parse_file(&path, Locale::En) {
        Err(GenerateError::ReadSource { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected ReadSource error, got {:?}", other),
    }
}
