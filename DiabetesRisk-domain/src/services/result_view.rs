//! Result rendering.
//!
//! The result view receives its state explicitly as an `Option`; a missing
//! state renders the empty view instead of failing.

use std::fmt;

use serde::Serialize;

use crate::entities::prediction::{PredictionLabel, ResultState};
use crate::entities::recommendation::{LifestyleRecommendation, MedicalRecommendation, Priority, RiskFactor};
use crate::services::insights;

/// Route of the assessment form
pub const ENTRY_ROUTE: &str = "/";

const HIGH_RISK_DESCRIPTION: &str = "Our analysis indicates you may be at increased risk for diabetes. \
The good news is that early awareness gives you the power to make positive changes.";
const LOW_RISK_DESCRIPTION: &str = "Your current health metrics and lifestyle choices suggest a lower \
risk profile for diabetes. Maintaining these healthy habits is key.";
const PROVIDER_ALERT: &str = "Consider consulting with a healthcare provider for personalized advice";
const DISCLAIMER: &str = "Your information was not stored and this is not a medical diagnosis";

/// A button that navigates somewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationAction {
    pub label: &'static str,
    pub route: &'static str,
}

/// Shown when the result view is reached without a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
    pub action: NavigationAction,
}

/// Risk badge at the top of the assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBadge {
    pub label: &'static str,
    pub emoji: &'static str,
}

/// Lifestyle section: either the single positive entry or the tip grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum LifestyleSection {
    Positive(LifestyleRecommendation),
    Tips(Vec<LifestyleRecommendation>),
}

/// Fully rendered assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    pub prediction: PredictionLabel,
    pub is_high_risk: bool,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: RiskBadge,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_alert: Option<&'static str>,
    /// Absent when no factor applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<Vec<RiskFactor>>,
    /// Absent when no medical recommendation applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_recommendations: Option<Vec<MedicalRecommendation>>,
    pub lifestyle: LifestyleSection,
    pub action: NavigationAction,
    pub disclaimer: &'static str,
}

/// What the result view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultView {
    Empty(EmptyState),
    Assessment(AssessmentView),
}

impl ResultView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResultView::Empty(_))
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Render the result view for an optional result state
pub fn render_result(state: Option<&ResultState>) -> ResultView {
    let Some(state) = state else {
        return ResultView::Empty(EmptyState {
            title: "No prediction data found",
            message: "Please complete the assessment to view your results",
            action: NavigationAction {
                label: "Take Assessment",
                route: ENTRY_ROUTE,
            },
        });
    };

    let explanation = insights::explain(state);
    let is_high_risk = explanation.is_high_risk;
    let recommendations = explanation.recommendations;

    let lifestyle = match recommendations.positive_reinforcement() {
        Some(positive) => LifestyleSection::Positive(positive.clone()),
        None => LifestyleSection::Tips(recommendations.lifestyle),
    };

    ResultView::Assessment(AssessmentView {
        prediction: state.prediction,
        is_high_risk,
        title: "Your Diabetes Risk Assessment",
        subtitle: if is_high_risk {
            "Important health insights for you"
        } else {
            "Your current health snapshot"
        },
        badge: if is_high_risk {
            RiskBadge { label: "Higher Risk", emoji: "⚠️" }
        } else {
            RiskBadge { label: "Lower Risk", emoji: "✅" }
        },
        description: if is_high_risk {
            HIGH_RISK_DESCRIPTION
        } else {
            LOW_RISK_DESCRIPTION
        },
        provider_alert: is_high_risk.then_some(PROVIDER_ALERT),
        risk_factors: non_empty(explanation.risk_factors),
        medical_recommendations: non_empty(recommendations.medical),
        lifestyle,
        action: NavigationAction {
            label: "Take Assessment Again",
            route: ENTRY_ROUTE,
        },
        disclaimer: DISCLAIMER,
    })
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultView::Empty(empty) => {
                writeln!(f, "{}", empty.title)?;
                writeln!(f, "{}", empty.message)?;
                write!(f, "[{}] -> {}", empty.action.label, empty.action.route)
            }
            ResultView::Assessment(view) => {
                writeln!(f, "{}", view.title)?;
                writeln!(f, "{}", view.subtitle)?;
                writeln!(f)?;
                writeln!(f, "{} {}", view.badge.label, view.badge.emoji)?;
                writeln!(f, "{}", view.description)?;
                if let Some(alert) = view.provider_alert {
                    writeln!(f, "! {}", alert)?;
                }

                if let Some(factors) = &view.risk_factors {
                    writeln!(f)?;
                    writeln!(f, "Key Risk Factors Identified")?;
                    for factor in factors {
                        writeln!(f, "  - {}", factor)?;
                    }
                }

                if let Some(recs) = &view.medical_recommendations {
                    writeln!(f)?;
                    writeln!(f, "Medical Recommendations")?;
                    for rec in recs {
                        let priority = match rec.priority {
                            Priority::High => "high",
                            Priority::Medium => "medium",
                        };
                        writeln!(f, "  [{}] {}", priority, rec.text)?;
                    }
                }

                writeln!(f)?;
                writeln!(f, "Lifestyle Suggestions")?;
                match &view.lifestyle {
                    LifestyleSection::Positive(rec) => writeln!(f, "  {} {}", rec.icon, rec.text)?,
                    LifestyleSection::Tips(tips) => {
                        for tip in tips {
                            writeln!(f, "  {} {}", tip.icon, tip.text)?;
                        }
                    }
                }

                writeln!(f)?;
                writeln!(f, "[{}] -> {}", view.action.label, view.action.route)?;
                write!(f, "{}", view.disclaimer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::lifestyle::{Alcohol, Diet, LifestyleInput, PhysicalActivity, Smoking};
    use crate::entities::medical::MedicalInput;
    use crate::entities::recommendation::LifestyleCategory;

    fn state(prediction: PredictionLabel, input: MedicalInput, lifestyle: LifestyleInput) -> ResultState {
        ResultState {
            prediction,
            prediction_input: input,
            lifestyle,
        }
    }

    fn healthy_input() -> MedicalInput {
        MedicalInput {
            pregnancies: 0.0,
            glucose: 95.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 85.0,
            bmi: 23.0,
            diabetes_pedigree_function: 0.2,
            age: 29.0,
        }
    }

    fn healthy_lifestyle() -> LifestyleInput {
        LifestyleInput {
            physical_activity: PhysicalActivity::High,
            smoking: Smoking::No,
            diet: Diet::Healthy,
            alcohol: Alcohol::Never,
        }
    }

    #[test]
    fn test_missing_state_renders_empty_view() {
        let view = render_result(None);
        match &view {
            ResultView::Empty(empty) => {
                assert_eq!(empty.title, "No prediction data found");
                assert_eq!(empty.action.route, ENTRY_ROUTE);
            }
            other => panic!("expected empty view, got {:?}", other),
        }
        assert!(view.to_string().contains("Take Assessment"));
    }

    #[test]
    fn test_low_risk_view_omits_empty_sections() {
        let view = render_result(Some(&state(PredictionLabel::Lower, healthy_input(), healthy_lifestyle())));
        let ResultView::Assessment(view) = view else {
            panic!("expected assessment");
        };

        assert!(!view.is_high_risk);
        assert_eq!(view.badge.label, "Lower Risk");
        assert_eq!(view.subtitle, "Your current health snapshot");
        assert!(view.provider_alert.is_none());
        assert!(view.risk_factors.is_none());
        assert!(view.medical_recommendations.is_none());
        match &view.lifestyle {
            LifestyleSection::Positive(rec) => assert_eq!(rec.category, LifestyleCategory::General),
            other => panic!("expected positive entry, got {:?}", other),
        }
    }

    #[test]
    fn test_high_risk_view_lists_factors_and_tips() {
        let input = MedicalInput {
            glucose: 150.0,
            blood_pressure: 120.0,
            bmi: 28.0,
            age: 50.0,
            ..healthy_input()
        };
        let view = render_result(Some(&state(PredictionLabel::Higher, input, LifestyleInput::default())));
        let ResultView::Assessment(view) = view else {
            panic!("expected assessment");
        };

        assert!(view.is_high_risk);
        assert_eq!(view.badge.emoji, "⚠️");
        assert_eq!(view.provider_alert, Some(PROVIDER_ALERT));
        assert_eq!(view.risk_factors.as_ref().map(Vec::len), Some(2));
        assert_eq!(view.medical_recommendations.as_ref().map(Vec::len), Some(1));
        match &view.lifestyle {
            LifestyleSection::Tips(tips) => assert_eq!(tips.len(), 2),
            other => panic!("expected tips, got {:?}", other),
        }
    }

    #[test]
    fn test_label_alone_decides_risk_badge() {
        // High-risk inputs with a lower-risk label still render as lower risk
        let input = MedicalInput {
            glucose: 190.0,
            ..healthy_input()
        };
        let ResultView::Assessment(view) = render_result(Some(&state(PredictionLabel::Lower, input, healthy_lifestyle())))
        else {
            panic!("expected assessment");
        };
        assert!(!view.is_high_risk);
        assert!(view.risk_factors.is_some());
    }

    #[test]
    fn test_text_rendering_includes_sections() {
        let input = MedicalInput {
            bmi: 32.0,
            ..healthy_input()
        };
        let text = render_result(Some(&state(PredictionLabel::Higher, input, healthy_lifestyle()))).to_string();

        assert!(text.starts_with("Your Diabetes Risk Assessment"));
        assert!(text.contains("Higher Risk ⚠️"));
        assert!(text.contains("  - High BMI (32) indicating obesity"));
        assert!(text.contains("[medium] Weight loss"));
        assert!(text.contains("👍"));
        assert!(text.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_serialized_view_is_tagged() {
        let json = serde_json::to_value(render_result(None)).unwrap();
        assert_eq!(json["kind"], "empty");

        let json = serde_json::to_value(render_result(Some(&state(
            PredictionLabel::Lower,
            healthy_input(),
            healthy_lifestyle(),
        ))))
        .unwrap();
        assert_eq!(json["kind"], "assessment");
        assert_eq!(json["isHighRisk"], false);
        assert_eq!(json["lifestyle"]["kind"], "positive");
        assert!(json.get("riskFactors").is_none());
    }
}
