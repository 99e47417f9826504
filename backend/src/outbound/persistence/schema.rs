//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Student login identities, keyed by email.
    users (email) {
        email -> Varchar,
        name -> Varchar,
        password -> Varchar,
    }
}

diesel::table! {
    /// Extended student records, keyed by login email.
    ///
    /// `aicte_points` is nullable: legacy rows predate the column and are
    /// rewritten to zero by the backfill operation.
    profiles (email_login) {
        email_login -> Varchar,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        college -> Nullable<Varchar>,
        student_id -> Nullable<Varchar>,
        year -> Nullable<Varchar>,
        branch -> Nullable<Varchar>,
        semester -> Nullable<Varchar>,
        graduation_year -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
        aicte_points -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Organization-published events.
    events (id) {
        id -> Uuid,
        title -> Varchar,
        description -> Text,
        domain -> Varchar,
        points -> Int4,
        poster_filename -> Nullable<Varchar>,
        poster_path -> Nullable<Varchar>,
        poster_mimetype -> Nullable<Varchar>,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        location_address -> Varchar,
        location_lat -> Float8,
        location_lng -> Float8,
        location_place_id -> Varchar,
        organized_by -> Varchar,
        org_email_login -> Varchar,
        created_at -> Timestamptz,
        status -> Varchar,
    }
}

diesel::table! {
    /// Registered organizations. Email and approval number are each unique.
    organizations (id) {
        id -> Uuid,
        full_name -> Varchar,
        designation -> Varchar,
        contact_number -> Varchar,
        organization_email -> Varchar,
        password -> Varchar,
        institution_name -> Varchar,
        aicte_approval_number -> Varchar,
        authorized_person_name -> Varchar,
        registered_at -> Timestamptz,
    }
}
