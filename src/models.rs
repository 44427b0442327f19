use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::*;

// Three projections per table: the full row, the insert shape (only columns
// without a database default are required; server-assigned ids are optional),
// and the update shape (everything optional; nullable columns take
// Option<Option<T>> so "leave unchanged" and "set NULL" stay distinct).

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    pub address: serde_json::Value,
    pub payment_method: Option<serde_json::Value>,
    pub subscription_tier: Option<String>,
    pub subscription_status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    pub address: serde_json::Value,
    pub payment_method: Option<serde_json::Value>,
    pub subscription_tier: Option<String>,
    pub subscription_status: Option<String>,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = users)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub address: Option<serde_json::Value>,
    pub payment_method: Option<Option<serde_json::Value>>,
    pub subscription_tier: Option<Option<String>>,
    pub subscription_status: Option<Option<String>>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = clients)]
#[diesel(belongs_to(User, foreign_key = created_by))]
pub struct Client {
    pub id: Uuid,
    pub created_by: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub address: serde_json::Value,
    pub employment_status: String,
    pub annual_income: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = clients)]
pub struct NewClient {
    pub id: Option<Uuid>,
    pub created_by: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub address: serde_json::Value,
    pub employment_status: String,
    pub annual_income: f64,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = clients)]
pub struct UpdateClient {
    pub created_by: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<serde_json::Value>,
    pub employment_status: Option<String>,
    pub annual_income: Option<f64>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = co_applicants)]
#[diesel(belongs_to(Client))]
pub struct CoApplicant {
    pub id: Uuid,
    pub client_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub address: serde_json::Value,
    pub relationship: String,
    pub employment_status: String,
    pub annual_income: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = co_applicants)]
pub struct NewCoApplicant {
    pub id: Option<Uuid>,
    pub client_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub address: serde_json::Value,
    pub relationship: String,
    pub employment_status: String,
    pub annual_income: f64,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = co_applicants)]
pub struct UpdateCoApplicant {
    pub client_id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<serde_json::Value>,
    pub relationship: Option<String>,
    pub employment_status: Option<String>,
    pub annual_income: Option<f64>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = subscriptions)]
#[diesel(belongs_to(User))]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub plan_id: String,
    pub status: String,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub cancel_at: Option<NaiveDateTime>,
    pub canceled_at: Option<NaiveDateTime>,
    pub trial_start: Option<NaiveDateTime>,
    pub trial_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct NewSubscription {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub plan_id: String,
    pub status: String,
    pub current_period_start: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub cancel_at: Option<NaiveDateTime>,
    pub canceled_at: Option<NaiveDateTime>,
    pub trial_start: Option<NaiveDateTime>,
    pub trial_end: Option<NaiveDateTime>,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = subscriptions)]
pub struct UpdateSubscription {
    pub user_id: Option<Uuid>,
    pub stripe_customer_id: Option<Option<String>>,
    pub stripe_subscription_id: Option<Option<String>>,
    pub plan_id: Option<String>,
    pub status: Option<String>,
    pub current_period_start: Option<Option<NaiveDateTime>>,
    pub current_period_end: Option<Option<NaiveDateTime>>,
    pub cancel_at: Option<Option<NaiveDateTime>>,
    pub canceled_at: Option<Option<NaiveDateTime>>,
    pub trial_start: Option<Option<NaiveDateTime>>,
    pub trial_end: Option<Option<NaiveDateTime>>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = documents)]
#[diesel(belongs_to(Client))]
pub struct Document {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub document_type: String,
    pub status: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub validation_errors: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocument {
    pub id: Option<Uuid>,
    pub client_id: Uuid,
    pub name: String,
    pub document_type: String,
    pub status: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub validation_errors: Option<Vec<String>>,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = documents)]
pub struct UpdateDocument {
    pub client_id: Option<Uuid>,
    pub name: Option<String>,
    pub document_type: Option<String>,
    pub status: Option<String>,
    pub file_path: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub validation_errors: Option<Vec<String>>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = document_metadata)]
#[diesel(belongs_to(Document))]
pub struct DocumentMetadata {
    pub id: Uuid,
    pub document_id: Uuid,
    pub metadata: serde_json::Value,
    pub analysis_results: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = document_metadata)]
pub struct NewDocumentMetadata {
    pub id: Option<Uuid>,
    pub document_id: Uuid,
    pub metadata: serde_json::Value,
    pub analysis_results: Option<serde_json::Value>,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = document_metadata)]
pub struct UpdateDocumentMetadata {
    pub document_id: Option<Uuid>,
    pub metadata: Option<serde_json::Value>,
    pub analysis_results: Option<Option<serde_json::Value>>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = financial_analysis)]
#[diesel(belongs_to(Client))]
pub struct FinancialAnalysis {
    pub id: Uuid,
    pub client_id: Uuid,
    pub analysis_date: NaiveDateTime,
    pub income_analysis: serde_json::Value,
    pub expense_analysis: serde_json::Value,
    pub risk_assessment: serde_json::Value,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = financial_analysis)]
pub struct NewFinancialAnalysis {
    pub id: Option<Uuid>,
    pub client_id: Uuid,
    pub analysis_date: Option<NaiveDateTime>,
    pub income_analysis: serde_json::Value,
    pub expense_analysis: serde_json::Value,
    pub risk_assessment: serde_json::Value,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = financial_analysis)]
pub struct UpdateFinancialAnalysis {
    pub client_id: Option<Uuid>,
    pub analysis_date: Option<NaiveDateTime>,
    pub income_analysis: Option<serde_json::Value>,
    pub expense_analysis: Option<serde_json::Value>,
    pub risk_assessment: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = assessments)]
#[diesel(belongs_to(Client))]
pub struct Assessment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub created_at: NaiveDateTime,
    pub assessment_data: serde_json::Value,
    pub analysis_period: serde_json::Value,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = assessments)]
pub struct NewAssessment {
    pub id: Option<Uuid>,
    pub client_id: Uuid,
    pub assessment_data: serde_json::Value,
    pub analysis_period: serde_json::Value,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = assessments)]
pub struct UpdateAssessment {
    pub client_id: Option<Uuid>,
    pub assessment_data: Option<serde_json::Value>,
    pub analysis_period: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = transactions)]
#[diesel(belongs_to(Client))]
pub struct Transactions {
    pub id: Uuid,
    pub client_id: Uuid,
    pub period: serde_json::Value,
    pub accounts: Vec<serde_json::Value>,
    pub categorized_transactions: serde_json::Value,
    pub summary: serde_json::Value,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = transactions)]
pub struct NewTransactions {
    pub id: Option<Uuid>,
    pub client_id: Uuid,
    pub period: serde_json::Value,
    pub accounts: Option<Vec<serde_json::Value>>,
    pub categorized_transactions: serde_json::Value,
    pub summary: serde_json::Value,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = transactions)]
pub struct UpdateTransactions {
    pub client_id: Option<Uuid>,
    pub period: Option<serde_json::Value>,
    pub accounts: Option<Vec<serde_json::Value>>,
    pub categorized_transactions: Option<serde_json::Value>,
    pub summary: Option<serde_json::Value>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = config)]
pub struct Config {
    pub id: String,
    pub used_spots: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = config)]
pub struct NewConfig {
    pub id: String,
    pub used_spots: Option<i32>,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = config)]
pub struct UpdateConfig {
    pub used_spots: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::{NewClient, UpdateSubscription, UpdateUser};

    #[test]
    fn insert_shape_leaves_server_assigned_id_out() {
        let new_client = NewClient {
            id: None,
            created_by: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "7700900123".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 12, 10).expect("valid date"),
            address: json!({ "city": "London" }),
            employment_status: "EMPLOYED".to_string(),
            annual_income: 54_000.0,
        };
        assert!(new_client.id.is_none());
    }

    #[test]
    fn update_shape_distinguishes_unset_from_null() {
        let untouched = UpdateUser::default();
        assert!(untouched.avatar_url.is_none());

        let cleared = UpdateUser {
            avatar_url: Some(None),
            ..UpdateUser::default()
        };
        assert_eq!(cleared.avatar_url, Some(None));
    }

    #[test]
    fn update_shape_requires_nothing() {
        let noop = UpdateSubscription::default();
        assert!(noop.plan_id.is_none());
        assert!(noop.cancel_at.is_none());
    }
}
