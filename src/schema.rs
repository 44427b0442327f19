// Hand-authored relational contract for the platform data store. The
// generated JSON types in `generated/` describe the wire shapes; these
// declarations describe the tables backing them.

diesel::table! {
    assessments (id) {
        id -> Uuid,
        client_id -> Uuid,
        created_at -> Timestamptz,
        assessment_data -> Jsonb,
        analysis_period -> Jsonb,
    }
}

diesel::table! {
    clients (id) {
        id -> Uuid,
        created_by -> Uuid,
        #[max_length = 50]
        first_name -> Varchar,
        #[max_length = 50]
        last_name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 15]
        phone_number -> Varchar,
        date_of_birth -> Date,
        address -> Jsonb,
        #[max_length = 16]
        employment_status -> Varchar,
        annual_income -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    co_applicants (id) {
        id -> Uuid,
        client_id -> Uuid,
        #[max_length = 50]
        first_name -> Varchar,
        #[max_length = 50]
        last_name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 15]
        phone_number -> Varchar,
        date_of_birth -> Date,
        address -> Jsonb,
        #[max_length = 32]
        relationship -> Varchar,
        #[max_length = 16]
        employment_status -> Varchar,
        annual_income -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    config (id) {
        #[max_length = 64]
        id -> Varchar,
        used_spots -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    document_metadata (id) {
        id -> Uuid,
        document_id -> Uuid,
        metadata -> Jsonb,
        analysis_results -> Nullable<Jsonb>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    documents (id) {
        id -> Uuid,
        client_id -> Uuid,
        #[max_length = 255]
        name -> Varchar,
        #[sql_name = "type"]
        #[max_length = 32]
        document_type -> Varchar,
        #[max_length = 16]
        status -> Varchar,
        #[max_length = 500]
        file_path -> Varchar,
        file_size -> Int8,
        #[max_length = 100]
        mime_type -> Varchar,
        validation_errors -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    financial_analysis (id) {
        id -> Uuid,
        client_id -> Uuid,
        analysis_date -> Timestamptz,
        income_analysis -> Jsonb,
        expense_analysis -> Jsonb,
        risk_assessment -> Jsonb,
    }
}

diesel::table! {
    subscriptions (id) {
        id -> Uuid,
        user_id -> Uuid,
        #[max_length = 30]
        stripe_customer_id -> Nullable<Varchar>,
        #[max_length = 30]
        stripe_subscription_id -> Nullable<Varchar>,
        #[max_length = 32]
        plan_id -> Varchar,
        #[max_length = 16]
        status -> Varchar,
        current_period_start -> Nullable<Timestamptz>,
        current_period_end -> Nullable<Timestamptz>,
        cancel_at -> Nullable<Timestamptz>,
        canceled_at -> Nullable<Timestamptz>,
        trial_start -> Nullable<Timestamptz>,
        trial_end -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    transactions (id) {
        id -> Uuid,
        client_id -> Uuid,
        period -> Jsonb,
        accounts -> Array<Jsonb>,
        categorized_transactions -> Jsonb,
        summary -> Jsonb,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Uuid,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 50]
        first_name -> Varchar,
        #[max_length = 50]
        last_name -> Varchar,
        #[max_length = 500]
        avatar_url -> Nullable<Varchar>,
        address -> Jsonb,
        payment_method -> Nullable<Jsonb>,
        #[max_length = 32]
        subscription_tier -> Nullable<Varchar>,
        #[max_length = 16]
        subscription_status -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(assessments -> clients (client_id));
diesel::joinable!(clients -> users (created_by));
diesel::joinable!(co_applicants -> clients (client_id));
diesel::joinable!(document_metadata -> documents (document_id));
diesel::joinable!(documents -> clients (client_id));
diesel::joinable!(financial_analysis -> clients (client_id));
diesel::joinable!(subscriptions -> users (user_id));
diesel::joinable!(transactions -> clients (client_id));

diesel::allow_tables_to_appear_in_same_query!(
    assessments,
    clients,
    co_applicants,
    config,
    document_metadata,
    documents,
    financial_analysis,
    subscriptions,
    transactions,
    users,
);
