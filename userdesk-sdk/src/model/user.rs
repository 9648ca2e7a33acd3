use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// the record as it looks after an update was accepted,
    /// built from the values the user typed rather than the server echo
    pub fn patched(&self, update: &UserUpdate) -> Self {
        Self {
            id: self.id,
            first_name: update.first_name.clone(),
            last_name: update.last_name.clone(),
            email: update.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// one page of the user listing
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct UserPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResp {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_TWO: &str = r#"{
        "page": 2,
        "per_page": 6,
        "total": 12,
        "total_pages": 2,
        "data": [
            {"id": 7, "email": "michael.lawson@reqres.in", "first_name": "Michael", "last_name": "Lawson", "avatar": "https://reqres.in/img/faces/7-image.jpg"},
            {"id": 8, "email": "lindsay.ferguson@reqres.in", "first_name": "Lindsay", "last_name": "Ferguson", "avatar": "https://reqres.in/img/faces/8-image.jpg"}
        ],
        "support": {"url": "https://reqres.in/#support-heading", "text": "ignored"}
    }"#;

    #[test]
    fn decodes_list_response_and_ignores_extra_fields() {
        let page: UserPage = serde_json::from_str(PAGE_TWO).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 7);
        assert_eq!(page.data[1].full_name(), "Lindsay Ferguson");
    }

    #[test]
    fn update_body_uses_snake_case_names() {
        let body = serde_json::to_value(UserUpdate {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
        })
        .unwrap();
        assert_eq!(body["first_name"], "Jane");
        assert_eq!(body["last_name"], "Doe");
        assert_eq!(body["email"], "jane@example.com");
    }

    #[test]
    fn patched_keeps_id_and_avatar() {
        let user = User {
            id: 3,
            first_name: "Emma".into(),
            last_name: "Wong".into(),
            email: "emma.wong@reqres.in".into(),
            avatar: "https://reqres.in/img/faces/3-image.jpg".into(),
        };
        let patched = user.patched(&UserUpdate {
            first_name: "Emily".into(),
            last_name: "Wong".into(),
            email: "emily@example.com".into(),
        });
        assert_eq!(patched.id, 3);
        assert_eq!(patched.avatar, user.avatar);
        assert_eq!(patched.first_name, "Emily");
        assert_eq!(patched.email, "emily@example.com");
    }
}
