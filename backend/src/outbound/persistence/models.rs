//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{events, organizations, profiles, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
}

// ---------------------------------------------------------------------------
// Profile models
// ---------------------------------------------------------------------------

/// Row struct for reading from the profiles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub email_login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub college: Option<String>,
    pub student_id: Option<String>,
    pub year: Option<String>,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub graduation_year: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub aicte_points: Option<i32>,
}

/// Insertable struct for creating new profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub(crate) struct NewProfileRow<'a> {
    pub email_login: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub college: Option<&'a str>,
    pub student_id: Option<&'a str>,
    pub year: Option<&'a str>,
    pub branch: Option<&'a str>,
    pub semester: Option<&'a str>,
    pub graduation_year: Option<&'a str>,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub aicte_points: Option<i32>,
}

/// Changeset for the profile merge-update.
///
/// `Option<Option<_>>` is deliberately avoided: absent patch fields simply
/// do not appear in the changeset, so stored values survive.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = profiles)]
pub(crate) struct ProfileChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub college: Option<&'a str>,
    pub student_id: Option<&'a str>,
    pub year: Option<&'a str>,
    pub branch: Option<&'a str>,
    pub semester: Option<&'a str>,
    pub graduation_year: Option<&'a str>,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub aicte_points: Option<i32>,
}

// ---------------------------------------------------------------------------
// Event models
// ---------------------------------------------------------------------------

/// Row struct for reading from the events table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub points: i32,
    pub poster_filename: Option<String>,
    pub poster_path: Option<String>,
    pub poster_mimetype: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_address: String,
    pub location_lat: f64,
    pub location_lng: f64,
    pub location_place_id: String,
    pub organized_by: String,
    pub org_email_login: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

/// Insertable struct for creating new event records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub domain: &'a str,
    pub points: i32,
    pub poster_filename: Option<&'a str>,
    pub poster_path: Option<&'a str>,
    pub poster_mimetype: Option<&'a str>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_address: &'a str,
    pub location_lat: f64,
    pub location_lng: f64,
    pub location_place_id: &'a str,
    pub organized_by: &'a str,
    pub org_email_login: &'a str,
    pub created_at: DateTime<Utc>,
    pub status: &'a str,
}

/// Changeset for the event merge-update.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = events)]
pub(crate) struct EventChangeset<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub domain: Option<&'a str>,
    pub points: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location_address: Option<&'a str>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_place_id: Option<&'a str>,
    pub organized_by: Option<&'a str>,
    pub status: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Organization models
// ---------------------------------------------------------------------------

/// Row struct for reading from the organizations table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = organizations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrganizationRow {
    pub id: Uuid,
    pub full_name: String,
    pub designation: String,
    pub contact_number: String,
    pub organization_email: String,
    pub password: String,
    pub institution_name: String,
    pub aicte_approval_number: String,
    pub authorized_person_name: String,
    pub registered_at: DateTime<Utc>,
}

/// Insertable struct for creating new organization records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = organizations)]
pub(crate) struct NewOrganizationRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub designation: &'a str,
    pub contact_number: &'a str,
    pub organization_email: &'a str,
    pub password: &'a str,
    pub institution_name: &'a str,
    pub aicte_approval_number: &'a str,
    pub authorized_person_name: &'a str,
    pub registered_at: DateTime<Utc>,
}
