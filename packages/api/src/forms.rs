//! # Form state and validation
//!
//! Pure form models for the recipe editor and the auth pages. Each
//! `validate` returns a [`FieldErrors`] map keyed by field name; an empty map
//! means the form may be submitted. Messages are the French strings shown
//! under each input.

use std::collections::BTreeMap;

use crate::models::{
    Credentials, Difficulty, Ingredient, PasswordChange, ProfileUpdate, Recipe, RecipeDraft,
    Registration, User,
};
use crate::transport::FileUpload;

pub const CUISINES: [&str; 4] = ["Camerounaise", "Africaine", "Occidentale", "Fusion"];
pub const DIETS: [&str; 5] = ["Végétarien", "Végétalien", "Sans gluten", "Sans lactose", "Aucun"];

/// Largest accepted recipe photo.
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// Field name → message, in field-name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// `^\S+@\S+\.\S+$`
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    email.match_indices('@').any(|(at, _)| {
        let domain = &email[at + 1..];
        at > 0 && domain.match_indices('.').any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert("email", "L'email est obligatoire");
    } else if !is_valid_email(email) {
        errors.insert("email", "L'email n'est pas valide");
    }
}

fn check_password(errors: &mut FieldErrors, field: &'static str, password: &str) {
    if password.is_empty() {
        errors.insert(field, "Le mot de passe est obligatoire");
    } else if password.chars().count() < 6 {
        errors.insert(field, "Le mot de passe doit comporter au moins 6 caractères");
    }
}

fn check_confirmation(errors: &mut FieldErrors, password: &str, confirm: &str) {
    if confirm.is_empty() {
        errors.insert("confirm_password", "La confirmation du mot de passe est obligatoire");
    } else if confirm != password {
        errors.insert("confirm_password", "Les mots de passe ne correspondent pas");
    }
}

/// 0..=4: one point each for length ≥ 8, mixed case, a digit, a symbol.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) && password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        1 => "Faible",
        2 => "Moyen",
        3 => "Bon",
        4 => "Excellent",
        _ => "",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, "password", &self.password);
        errors
    }

    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.trim().to_string(), password: self.password.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.first_name.trim().is_empty() {
            errors.insert("first_name", "Le prénom est obligatoire");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("last_name", "Le nom est obligatoire");
        }
        check_email(&mut errors, &self.email);
        check_password(&mut errors, "password", &self.password);
        check_confirmation(&mut errors, &self.password, &self.confirm_password);
        errors
    }

    pub fn registration(&self) -> Registration {
        Registration {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.first_name.trim().is_empty() {
            errors.insert("first_name", "Le prénom est obligatoire");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("last_name", "Le nom est obligatoire");
        }
        check_email(&mut errors, &self.email);
        errors
    }

    pub fn update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.current_password.is_empty() {
            errors.insert("current_password", "Le mot de passe actuel est obligatoire");
        }
        check_password(&mut errors, "new_password", &self.new_password);
        check_confirmation(&mut errors, &self.new_password, &self.confirm_password);
        errors
    }

    pub fn change(&self) -> PasswordChange {
        PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        }
    }
}

/// A number typed into a text field, accepted when finite.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Editable recipe, one text field per input.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub prep_minutes: String,
    pub cook_minutes: String,
    pub difficulty: String,
    pub cuisine: String,
    pub diets: Vec<String>,
    pub calories: String,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: vec![Ingredient::default()],
            steps: vec![String::new()],
            prep_minutes: String::new(),
            cook_minutes: String::new(),
            difficulty: String::new(),
            cuisine: String::new(),
            diets: Vec::new(),
            calories: String::new(),
        }
    }
}

impl RecipeForm {
    /// Prefilled from an existing recipe for editing.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let number = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
        let mut form = Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            prep_minutes: number(recipe.prep_minutes),
            cook_minutes: number(recipe.cook_minutes),
            difficulty: recipe.difficulty.as_ref().map(|d| d.label().to_string()).unwrap_or_default(),
            cuisine: recipe.cuisine.clone().unwrap_or_default(),
            diets: recipe.diets.clone(),
            calories: number(recipe.calories),
        };
        if form.ingredients.is_empty() {
            form.ingredients.push(Ingredient::default());
        }
        if form.steps.is_empty() {
            form.steps.push(String::new());
        }
        form
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::default());
    }

    /// Removes a row; the last remaining row stays.
    pub fn remove_ingredient(&mut self, index: usize) {
        if self.ingredients.len() > 1 && index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    pub fn add_step(&mut self) {
        self.steps.push(String::new());
    }

    pub fn remove_step(&mut self, index: usize) {
        if self.steps.len() > 1 && index < self.steps.len() {
            self.steps.remove(index);
        }
    }

    pub fn toggle_diet(&mut self, diet: &str) {
        if let Some(pos) = self.diets.iter().position(|d| d == diet) {
            self.diets.remove(pos);
        } else {
            self.diets.push(diet.to_string());
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert("title", "Le titre est obligatoire");
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "La description est obligatoire");
        }

        if self.ingredients.is_empty() {
            errors.insert("ingredients", "Au moins un ingrédient est obligatoire");
        } else if self
            .ingredients
            .iter()
            .any(|i| i.name.trim().is_empty() || i.quantity.trim().is_empty())
        {
            errors.insert("ingredients", "Tous les ingrédients doivent avoir un nom et une quantité");
        }

        if self.steps.is_empty() {
            errors.insert("steps", "Au moins une étape est obligatoire");
        } else if self.steps.iter().any(|s| s.trim().is_empty()) {
            errors.insert("steps", "Les étapes ne peuvent pas être vides");
        }

        if self.prep_minutes.trim().is_empty() {
            errors.insert("prep_minutes", "Le temps de préparation est obligatoire");
        } else if !parse_number(&self.prep_minutes).is_some_and(|n| n > 0.0) {
            errors.insert("prep_minutes", "Le temps de préparation doit être un nombre positif");
        }
        if !self.cook_minutes.trim().is_empty() && !parse_number(&self.cook_minutes).is_some_and(|n| n >= 0.0) {
            errors.insert("cook_minutes", "Le temps de cuisson doit être un nombre positif");
        }
        if !self.calories.trim().is_empty() && !parse_number(&self.calories).is_some_and(|n| n >= 0.0) {
            errors.insert("calories", "Les calories doivent être un nombre positif");
        }

        if self.difficulty.trim().is_empty() {
            errors.insert("difficulty", "Veuillez sélectionner un niveau de difficulté");
        }
        if self.cuisine.trim().is_empty() {
            errors.insert("cuisine", "Veuillez sélectionner un type de cuisine");
        }
        errors
    }

    /// Validated payload. Numbers are truncated to whole minutes/calories,
    /// empty optional numbers are omitted and blank diet tags dropped.
    pub fn to_draft(&self) -> Result<RecipeDraft, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let whole = |raw: &str| parse_number(raw).map(|n| n.trunc() as u32);
        Ok(RecipeDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients: self
                .ingredients
                .iter()
                .map(|i| Ingredient {
                    name: i.name.trim().to_string(),
                    quantity: i.quantity.trim().to_string(),
                    unit: i.unit.trim().to_string(),
                })
                .collect(),
            steps: self.steps.iter().map(|s| s.trim().to_string()).collect(),
            prep_minutes: whole(&self.prep_minutes).unwrap_or_default(),
            cook_minutes: whole(&self.cook_minutes),
            difficulty: Difficulty::from(self.difficulty.trim().to_string()),
            cuisine: self.cuisine.trim().to_string(),
            diets: self.diets.iter().filter(|d| !d.trim().is_empty()).cloned().collect(),
            calories: whole(&self.calories),
        })
    }
}

/// Checks a picked recipe photo; the message is shown as a toast.
pub fn check_photo(photo: &FileUpload) -> Result<(), &'static str> {
    if !photo.is_image() {
        return Err("Veuillez sélectionner une image valide");
    }
    if photo.bytes.len() > MAX_PHOTO_BYTES {
        return Err("L'image ne doit pas dépasser 2 Mo");
    }
    Ok(())
}
