use serde::{Deserialize, Serialize};

use super::repo_types::Profile;

/// Body of `POST /profile`. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
}

/// Values the edit form starts with.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProfileFormDefaults {
    pub full_name: String,
    pub skills: String,
    pub interests: String,
}

impl From<Option<&Profile>> for ProfileFormDefaults {
    fn from(profile: Option<&Profile>) -> Self {
        match profile {
            Some(p) => Self {
                full_name: p.full_name.clone().unwrap_or_default(),
                skills: p.skills.join(", "),
                interests: p.interests.join(", "),
            },
            None => Self {
                full_name: String::new(),
                skills: String::new(),
                interests: String::new(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub profile: Option<Profile>,
    pub form: ProfileFormDefaults,
}
