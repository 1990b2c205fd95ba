use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type HabitId = u64;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
	Health,
	Study,
	Work,
	Hobby,
	#[default]
	Other,
}

impl HabitCategory {
	pub const ALL: [HabitCategory; 5] = [Self::Health, Self::Study, Self::Work, Self::Hobby, Self::Other];

	/// The value used for this category on the wire and in form fields
	pub fn value(&self) -> &'static str {
		match self {
			Self::Health => "health",
			Self::Study => "study",
			Self::Work => "work",
			Self::Hobby => "hobby",
			Self::Other => "other",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Health => "💪 Health",
			Self::Study => "📚 Study",
			Self::Work => "💼 Work",
			Self::Hobby => "🎨 Hobbies",
			Self::Other => "✨ Other",
		}
	}

	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|category| category.value() == value)
	}
}

impl fmt::Display for HabitCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Habit {
	pub id: HabitId,
	pub user_id: u64,
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub category: HabitCategory,
	pub is_public: bool,
	pub track_time: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Habit {
	/// Applies the fields present in an update to this habit.
	pub fn apply_update(&mut self, update: &HabitUpdate) {
		if let Some(title) = update.title.as_ref() {
			self.title = title.clone();
		}
		if let Some(description) = update.description.as_ref() {
			self.description = Some(description.clone());
		}
		if let Some(category) = update.category {
			self.category = category;
		}
		if let Some(is_public) = update.is_public {
			self.is_public = is_public;
		}
		if let Some(track_time) = update.track_time {
			self.track_time = track_time;
		}
	}
}

/// Data from the client to create a habit
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewHabit {
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub category: HabitCategory,
	pub is_public: bool,
	pub track_time: bool,
}

/// Changes to an existing habit. Fields left as `None` are not sent and stay unchanged.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HabitUpdate {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<HabitCategory>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_public: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub track_time: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompleteHabit {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time_spent: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HabitCompletion {
	pub id: u64,
	pub habit_id: HabitId,
	pub completed_at: DateTime<Utc>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time_spent: Option<u32>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn categories_use_lowercase_names() {
		assert_eq!(serde_json::to_string(&HabitCategory::Hobby).unwrap(), "\"hobby\"");
		for category in HabitCategory::ALL {
			assert_eq!(HabitCategory::from_value(category.value()), Some(category));
		}
		assert_eq!(HabitCategory::from_value("sleep"), None);
	}

	#[test]
	fn update_omits_unset_fields() {
		let update = HabitUpdate {
			title: Some(String::from("Stretch")),
			..Default::default()
		};
		assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"title":"Stretch"}"#);
	}

	#[test]
	fn apply_update_keeps_missing_fields() {
		let now = Utc::now();
		let mut habit = Habit {
			id: 1,
			user_id: 1,
			title: String::from("Meditate"),
			description: None,
			category: HabitCategory::Health,
			is_public: true,
			track_time: true,
			created_at: now,
			updated_at: now,
		};
		habit.apply_update(&HabitUpdate {
			description: Some(String::from("Ten minutes")),
			is_public: Some(false),
			..Default::default()
		});
		assert_eq!(habit.title, "Meditate");
		assert_eq!(habit.description.as_deref(), Some("Ten minutes"));
		assert_eq!(habit.category, HabitCategory::Health);
		assert!(!habit.is_public);
		assert!(habit.track_time);
	}
}
