use chrono::{DateTime, NaiveDate, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    /// free text, e.g. "1 cup" / "150 g"
    pub amount: Option<String>,
    pub calories: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// e.g. "Kahvaltı"
    pub name: String,
    /// "08:00"
    pub time: Option<String>,
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanInfo {
    pub id: i64,
    pub user_id: i64,
    pub client_id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub daily_calories: Option<i32>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub meals: Vec<Meal>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for DietPlanInfo {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn owner_id(&self) -> Option<i64> {
        Some(self.client_id)
    }
}

fn validate_meals(meals: &[Meal]) -> Result<(), ValidationError> {
    for meal in meals {
        if meal.name.trim().is_empty() {
            return Err(ValidationError::new("meal.name.empty").with_message("Meal name is required".into()));
        }
        if meal.foods.iter().any(|food| food.name.trim().is_empty()) {
            return Err(ValidationError::new("food.name.empty").with_message("Food name is required".into()));
        }
        if meal.foods.iter().any(|food| food.calories.is_some_and(|c| c < 0)) {
            return Err(ValidationError::new("food.calories.negative").with_message("Calories cannot be negative".into()));
        }
    }
    Ok(())
}

fn validate_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(ValidationError::new("date.range").with_message("End date must not precede start date".into())),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_plan_dates", skip_on_field_errors = false))]
pub struct NewDietPlan {
    #[validate(length(min = 2, max = 120, message = "Plan name must be 2-120 characters"))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[validate(range(min = 500, max = 10000, message = "Daily calories must be 500-10000"))]
    pub daily_calories: Option<i32>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub protein_g: Option<f64>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub carbs_g: Option<f64>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub fat_g: Option<f64>,
    #[serde(default)]
    #[validate(custom(function = "validate_meals"))]
    pub meals: Vec<Meal>,
    pub notes: Option<String>,
}

fn validate_new_plan_dates(plan: &NewDietPlan) -> Result<(), ValidationError> {
    validate_range(plan.start_date, plan.end_date)
}

impl NewDietPlan {
    pub fn into_plan(self, user_id: i64, client_id: i64, created_at: DateTime<Utc>) -> DietPlanInfo {
        DietPlanInfo {
            id: 0,
            user_id,
            client_id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            daily_calories: self.daily_calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            meals: self.meals,
            notes: self.notes,
            is_active: true,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanPatch {
    #[validate(length(min = 2, max = 120, message = "Plan name must be 2-120 characters"))]
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(range(min = 500, max = 10000, message = "Daily calories must be 500-10000"))]
    pub daily_calories: Option<i32>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub protein_g: Option<f64>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub carbs_g: Option<f64>,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub fat_g: Option<f64>,
    #[validate(custom(function = "validate_meals"))]
    pub meals: Option<Vec<Meal>>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

impl DietPlanPatch {
    /// Date order is checked against the merged result.
    pub fn check_dates(&self, current: &DietPlanInfo) -> Result<(), ValidationError> {
        let start = self.start_date.unwrap_or(current.start_date);
        let end = self.end_date.or(current.end_date);
        validate_range(start, end)
    }

    pub fn apply_to(self, plan: &mut DietPlanInfo) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(start) = self.start_date {
            plan.start_date = start;
        }
        if self.end_date.is_some() {
            plan.end_date = self.end_date;
        }
        if self.daily_calories.is_some() {
            plan.daily_calories = self.daily_calories;
        }
        if self.protein_g.is_some() {
            plan.protein_g = self.protein_g;
        }
        if self.carbs_g.is_some() {
            plan.carbs_g = self.carbs_g;
        }
        if self.fat_g.is_some() {
            plan.fat_g = self.fat_g;
        }
        if let Some(meals) = self.meals {
            plan.meals = meals;
        }
        if self.notes.is_some() {
            plan.notes = self.notes;
        }
        if let Some(active) = self.is_active {
            plan.is_active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, calories: Option<i32>) -> FoodItem {
        FoodItem { name: name.to_string(), amount: None, calories }
    }

    #[test]
    fn meals_carry_over_into_the_plan() {
        let plan = NewDietPlan {
            name: "Kilo Verme Diyeti".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            daily_calories: Some(1600),
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            meals: vec![
                Meal { name: "Kahvaltı".into(), time: Some("08:00".into()), foods: vec![food("Yumurta", Some(140)), food("Peynir", None)] },
                Meal { name: "Öğle".into(), time: None, foods: vec![food("Salata", Some(220))] },
            ],
            notes: None,
        }
        .into_plan(1, 2, Utc::now());
        assert_eq!(plan.meals.len(), 2);
        assert_eq!(plan.meals[0].name, "Kahvaltı");
        assert_eq!(plan.meals[0].foods[1].calories, None);
        assert_eq!(plan.daily_calories, Some(1600));
        assert!(plan.is_active);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let plan = NewDietPlan {
            name: "Plan".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            daily_calories: None,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            meals: vec![],
            notes: None,
        };
        assert!(plan.validate().is_err());
    }

    #[test]
    fn empty_meal_name_is_rejected() {
        assert!(validate_meals(&[Meal { name: " ".into(), time: None, foods: vec![] }]).is_err());
        assert!(validate_meals(&[Meal { name: "Ara".into(), time: None, foods: vec![food("Elma", Some(-1))] }]).is_err());
    }
}
