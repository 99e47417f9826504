//! Extended student record and AICTE points accounting.
//!
//! A [`Profile`] is keyed by the login email (`email_login`) and stores the
//! student's self-maintained details plus the accumulated AICTE points
//! scalar. Points are a stored value, never derived from events; the only
//! automatic correction is the backfill that sets missing values to zero.
//!
//! Serialised field names follow the existing wire contract exactly
//! (`email_login`, `studentId`, `aictePoints`, ...).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Extended student record, keyed by login email.
///
/// `aicte_points` is `None` only for legacy records created before the
/// points field existed; the backfill operation rewrites those to zero.
/// New profiles always start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "email_login")]
    pub email_login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aicte_points: Option<i32>,
}

impl Profile {
    /// Create an empty profile for the given login email.
    ///
    /// The points field starts absent; creation paths that go through
    /// [`Profile::apply_patch`] with [`ProfilePatch::with_creation_defaults`]
    /// end up at zero, matching the store-level default.
    pub fn new(email_login: impl Into<String>) -> Self {
        Self {
            email_login: email_login.into(),
            name: None,
            email: None,
            college: None,
            student_id: None,
            year: None,
            branch: None,
            semester: None,
            graduation_year: None,
            address: None,
            phone: None,
            aicte_points: None,
        }
    }

    /// Merge the supplied fields into this profile.
    ///
    /// Absent patch fields leave the stored value untouched, mirroring a
    /// `$set` of only the provided keys.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &patch.$field {
                        self.$field = Some(value.clone());
                    }
                )*
            };
        }
        merge!(
            name,
            email,
            college,
            student_id,
            year,
            branch,
            semester,
            graduation_year,
            address,
            phone
        );
        if let Some(points) = patch.aicte_points {
            self.aicte_points = Some(points);
        }
    }
}

/// Fields accepted by the profile upsert operation.
///
/// Every field is optional; unknown request fields are ignored rather than
/// merged blindly. `aictePoints` accepts either a JSON number or a numeric
/// string and is coerced to an integer at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_points"
    )]
    #[schema(value_type = Option<i32>)]
    pub aicte_points: Option<i32>,
}

impl ProfilePatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Return a copy with the creation-time default applied: a profile
    /// created without an explicit points value starts at zero.
    pub fn with_creation_defaults(&self) -> Self {
        let mut patch = self.clone();
        if patch.aicte_points.is_none() {
            patch.aicte_points = Some(0);
        }
        patch
    }
}

/// Accept `42`, `"42"`, or `" 42 "` for the points field; reject anything
/// that is not an integer.
fn deserialize_points<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PointsInput {
        Number(i64),
        Text(String),
    }

    let Some(input) = Option::<PointsInput>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = match input {
        PointsInput::Number(n) => {
            i32::try_from(n).map_err(|_| de::Error::custom("aictePoints out of range"))?
        }
        PointsInput::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom("aictePoints must be an integer"))?,
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "aictePoints": 42 }), 42)]
    #[case(json!({ "aictePoints": "42" }), 42)]
    #[case(json!({ "aictePoints": " 17 " }), 17)]
    #[case(json!({ "aictePoints": "0" }), 0)]
    fn points_are_coerced_to_integers(#[case] body: serde_json::Value, #[case] expected: i32) {
        let patch: ProfilePatch = serde_json::from_value(body).expect("deserialise patch");
        assert_eq!(patch.aicte_points, Some(expected));
    }

    #[rstest]
    #[case(json!({ "aictePoints": "forty-two" }))]
    #[case(json!({ "aictePoints": "12.5" }))]
    #[case(json!({ "aictePoints": [1, 2] }))]
    fn non_integer_points_are_rejected(#[case] body: serde_json::Value) {
        assert!(serde_json::from_value::<ProfilePatch>(body).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let patch: ProfilePatch = serde_json::from_value(json!({
            "college": "NIT Trichy",
            "favouriteColour": "teal"
        }))
        .expect("deserialise patch");
        assert_eq!(patch.college.as_deref(), Some("NIT Trichy"));
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let mut profile = Profile::new("asha@college.edu");
        profile.name = Some("Asha".into());
        profile.aicte_points = Some(30);

        let patch = ProfilePatch {
            college: Some("NIT Trichy".into()),
            ..ProfilePatch::default()
        };
        profile.apply_patch(&patch);

        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.college.as_deref(), Some("NIT Trichy"));
        assert_eq!(profile.aicte_points, Some(30));
    }

    #[test]
    fn creation_defaults_set_points_to_zero() {
        let patch = ProfilePatch {
            name: Some("Asha".into()),
            ..ProfilePatch::default()
        };
        let mut profile = Profile::new("asha@college.edu");
        profile.apply_patch(&patch.with_creation_defaults());
        assert_eq!(profile.aicte_points, Some(0));
    }

    #[test]
    fn explicit_points_survive_creation_defaults() {
        let patch = ProfilePatch {
            aicte_points: Some(55),
            ..ProfilePatch::default()
        };
        assert_eq!(patch.with_creation_defaults().aicte_points, Some(55));
    }

    #[test]
    fn serialised_profile_uses_wire_field_names() {
        let mut profile = Profile::new("asha@college.edu");
        profile.student_id = Some("21BCE100".into());
        profile.aicte_points = Some(12);

        let value = serde_json::to_value(&profile).expect("serialise profile");
        assert_eq!(
            value.get("email_login").and_then(|v| v.as_str()),
            Some("asha@college.edu")
        );
        assert_eq!(
            value.get("studentId").and_then(|v| v.as_str()),
            Some("21BCE100")
        );
        assert_eq!(value.get("aictePoints").and_then(|v| v.as_i64()), Some(12));
    }
}
