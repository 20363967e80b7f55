use std::fmt;
use std::str::FromStr;

use datacat_core::ValidationError;
use datacat_i18n::gettext;
use serde::{Deserialize, Serialize};

/// Kind of reuse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReuseType {
	Api,
	#[default]
	Application,
	Idea,
	NewsArticle,
	Paper,
	Post,
	Visualization,
	Hardware,
}

impl ReuseType {
	pub const ALL: [ReuseType; 8] = [
		Self::Api,
		Self::Application,
		Self::Idea,
		Self::NewsArticle,
		Self::Paper,
		Self::Post,
		Self::Visualization,
		Self::Hardware,
	];

	pub fn code(&self) -> &'static str {
		match self {
			Self::Api => "api",
			Self::Application => "application",
			Self::Idea => "idea",
			Self::NewsArticle => "news_article",
			Self::Paper => "paper",
			Self::Post => "post",
			Self::Visualization => "visualization",
			Self::Hardware => "hardware",
		}
	}

	/// Untranslated label, the message id looked up by [`label`](Self::label)
	pub fn msgid(&self) -> &'static str {
		match self {
			Self::Api => "API",
			Self::Application => "Application",
			Self::Idea => "Idea",
			Self::NewsArticle => "News Article",
			Self::Paper => "Paper",
			Self::Post => "Post",
			Self::Visualization => "Visualization",
			Self::Hardware => "Connected device",
		}
	}

	pub fn label(&self) -> String {
		gettext(self.msgid())
	}
}

impl FromStr for ReuseType {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.code() == s)
			.ok_or_else(|| ValidationError::invalid_choice("type", s))
	}
}

impl fmt::Display for ReuseType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Thematic area of a reuse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReuseTopic {
	Health,
	TransportAndMobility,
	HousingAndDevelopment,
	FoodAndAgriculture,
	CultureAndRecreation,
	EconomyAndBusiness,
	EnvironmentAndEnergy,
	WorkAndTraining,
	PoliticsAndPublicLife,
	SafetyAndSecurity,
	EducationAndResearch,
	SocietyAndDemography,
	LawAndJustice,
	OpenDataTools,
	#[default]
	Others,
}

impl ReuseTopic {
	pub const ALL: [ReuseTopic; 15] = [
		Self::Health,
		Self::TransportAndMobility,
		Self::HousingAndDevelopment,
		Self::FoodAndAgriculture,
		Self::CultureAndRecreation,
		Self::EconomyAndBusiness,
		Self::EnvironmentAndEnergy,
		Self::WorkAndTraining,
		Self::PoliticsAndPublicLife,
		Self::SafetyAndSecurity,
		Self::EducationAndResearch,
		Self::SocietyAndDemography,
		Self::LawAndJustice,
		Self::OpenDataTools,
		Self::Others,
	];

	pub fn code(&self) -> &'static str {
		match self {
			Self::Health => "health",
			Self::TransportAndMobility => "transport_and_mobility",
			Self::HousingAndDevelopment => "housing_and_development",
			Self::FoodAndAgriculture => "food_and_agriculture",
			Self::CultureAndRecreation => "culture_and_recreation",
			Self::EconomyAndBusiness => "economy_and_business",
			Self::EnvironmentAndEnergy => "environment_and_energy",
			Self::WorkAndTraining => "work_and_training",
			Self::PoliticsAndPublicLife => "politics_and_public_life",
			Self::SafetyAndSecurity => "safety_and_security",
			Self::EducationAndResearch => "education_and_research",
			Self::SocietyAndDemography => "society_and_demography",
			Self::LawAndJustice => "law_and_justice",
			Self::OpenDataTools => "open_data_tools",
			Self::Others => "others",
		}
	}

	pub fn msgid(&self) -> &'static str {
		match self {
			Self::Health => "Health",
			Self::TransportAndMobility => "Transport and mobility",
			Self::HousingAndDevelopment => "Housing and development",
			Self::FoodAndAgriculture => "Food and agriculture",
			Self::CultureAndRecreation => "Culture and recreation",
			Self::EconomyAndBusiness => "Economy and business",
			Self::EnvironmentAndEnergy => "Environment and energy",
			Self::WorkAndTraining => "Work and training",
			Self::PoliticsAndPublicLife => "Politics and public life",
			Self::SafetyAndSecurity => "Safety and security",
			Self::EducationAndResearch => "Education and research",
			Self::SocietyAndDemography => "Society and demography",
			Self::LawAndJustice => "Law and justice",
			Self::OpenDataTools => "Open data tools",
			Self::Others => "Others",
		}
	}

	pub fn label(&self) -> String {
		gettext(self.msgid())
	}
}

impl FromStr for ReuseTopic {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.code() == s)
			.ok_or_else(|| ValidationError::invalid_choice("topic", s))
	}
}

impl fmt::Display for ReuseTopic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_type_codes_round_trip_through_from_str() {
		for reuse_type in ReuseType::ALL {
			assert_eq!(reuse_type.code().parse::<ReuseType>().unwrap(), reuse_type);
		}
	}

	#[rstest]
	fn test_topic_codes_match_serde_names() {
		for topic in ReuseTopic::ALL {
			let json = serde_json::to_value(topic).unwrap();
			assert_eq!(json, serde_json::Value::String(topic.code().to_string()));
		}
	}

	#[rstest]
	#[case("API")]
	#[case("apps")]
	#[case("")]
	fn test_unknown_type_code(#[case] code: &str) {
		let result = code.parse::<ReuseType>();

		assert_eq!(result, Err(ValidationError::invalid_choice("type", code)));
	}

	#[rstest]
	fn test_unknown_topic_code() {
		let result = "sports".parse::<ReuseTopic>();

		assert!(matches!(result, Err(ValidationError::InvalidChoice { field, .. }) if field == "topic"));
	}
}
