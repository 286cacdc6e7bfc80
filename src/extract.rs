//! Per-framework field extraction.
//!
//! Each framework's documents arrive as loosely structured JSON; the typed
//! views below give every known shape an explicit optional-field schema so
//! "tolerate missing nesting" is a property of the types rather than of
//! presence checks scattered through the callers. A body that does not fit
//! the schema at all degrades to an empty extraction, never an error.

use crate::framework::Framework;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which extraction path produced a provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionKind {
    Condition,
    SectionCondition,
    SubsectionProvision,
    Control,
    Aim,
    Requirement,
}

/// One searchable entry pulled out of a framework document.
///
/// All fields are plain strings; absent source fields come through as empty
/// strings so downstream string operations stay total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provision {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub kind: ProvisionKind,
}

impl Provision {
    /// Body text truncated to at most `max_chars` characters for display and
    /// prompt-context lines.
    pub fn snippet(&self, max_chars: usize) -> String {
        if self.body.chars().count() <= max_chars {
            return self.body.clone();
        }
        self.body.chars().take(max_chars).collect()
    }
}

/// Extract the flat provision list for one document body.
pub fn extract_provisions(framework: Framework, body: &Value) -> Vec<Provision> {
    match framework {
        Framework::Lccp => extract_lccp(body),
        Framework::Iso27001 => extract_iso(body),
        Framework::Rts => extract_rts(body),
    }
}

// Licence conditions: a flat condition list, per-section condition lists, and
// a section -> subsection -> provision tree can all coexist in one file.

#[derive(Debug, Default, Deserialize)]
struct LccpDocument {
    #[serde(default)]
    document_reference: String,
    #[serde(default)]
    conditions: Vec<LccpCondition>,
    #[serde(default)]
    sections: Vec<LccpSection>,
}

#[derive(Debug, Default, Deserialize)]
struct LccpCondition {
    #[serde(default)]
    condition_id: String,
    #[serde(default)]
    condition_title: String,
    #[serde(default)]
    condition_text: String,
}

#[derive(Debug, Default, Deserialize)]
struct LccpSection {
    #[serde(default)]
    section_title: String,
    #[serde(default)]
    conditions: Vec<LccpCondition>,
    #[serde(default)]
    subsections: Vec<LccpSubsection>,
}

#[derive(Debug, Default, Deserialize)]
struct LccpSubsection {
    #[serde(default)]
    provisions: Vec<LccpProvision>,
}

#[derive(Debug, Default, Deserialize)]
struct LccpProvision {
    #[serde(default)]
    provision_id: String,
    #[serde(default)]
    provision_title: String,
    #[serde(default)]
    provision_text: String,
}

fn extract_lccp(body: &Value) -> Vec<Provision> {
    let doc: LccpDocument = serde_json::from_value(body.clone()).unwrap_or_default();
    let mut out = Vec::new();

    for condition in &doc.conditions {
        push(
            &mut out,
            ProvisionKind::Condition,
            &condition.condition_id,
            &condition.condition_title,
            &condition.condition_text,
            &doc.document_reference,
        );
    }

    for section in &doc.sections {
        for condition in &section.conditions {
            push(
                &mut out,
                ProvisionKind::SectionCondition,
                &condition.condition_id,
                &condition.condition_title,
                &condition.condition_text,
                &section.section_title,
            );
        }
        for subsection in &section.subsections {
            for provision in &subsection.provisions {
                push(
                    &mut out,
                    ProvisionKind::SubsectionProvision,
                    &provision.provision_id,
                    &provision.provision_title,
                    &provision.provision_text,
                    &section.section_title,
                );
            }
        }
    }

    out
}

// Security controls: one control object under a known field, the category
// lives at the document root. At most one provision per document.

#[derive(Debug, Default, Deserialize)]
struct IsoDocument {
    control: Option<IsoControl>,
    #[serde(default)]
    control_category: String,
}

#[derive(Debug, Default, Deserialize)]
struct IsoControl {
    #[serde(default)]
    control_id: String,
    #[serde(default)]
    control_number: String,
    #[serde(default)]
    control_title: String,
    #[serde(default)]
    control_objective: String,
}

fn extract_iso(body: &Value) -> Vec<Provision> {
    let doc: IsoDocument = serde_json::from_value(body.clone()).unwrap_or_default();
    let mut out = Vec::new();

    if let Some(control) = &doc.control {
        // Some files carry control_id, some only control_number
        let id = if control.control_id.is_empty() {
            &control.control_number
        } else {
            &control.control_id
        };
        push(
            &mut out,
            ProvisionKind::Control,
            id,
            &control.control_title,
            &control.control_objective,
            &doc.control_category,
        );
    }

    out
}

// Technical standards: one aim object plus a requirement list. The aim's
// identifier is the RTS- prefix joined with the numeric aim number; files
// that only carry a literal aim_id fall back to that.

#[derive(Debug, Default, Deserialize)]
struct RtsDocument {
    aim: Option<RtsAim>,
    #[serde(default)]
    requirements: Vec<RtsRequirement>,
}

#[derive(Debug, Default, Deserialize)]
struct RtsAim {
    #[serde(default)]
    aim_number: Value,
    #[serde(default)]
    aim_id: String,
    #[serde(default)]
    aim_title: String,
    #[serde(default)]
    aim_description: String,
    #[serde(default)]
    aim_details: String,
}

#[derive(Debug, Default, Deserialize)]
struct RtsRequirement {
    #[serde(default)]
    requirement_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    requirement_text: String,
}

fn extract_rts(body: &Value) -> Vec<Provision> {
    let doc: RtsDocument = serde_json::from_value(body.clone()).unwrap_or_default();
    let mut out = Vec::new();

    if let Some(aim) = &doc.aim {
        let number = number_text(&aim.aim_number);
        let id = if number.is_empty() {
            aim.aim_id.clone()
        } else {
            format!("RTS-{}", number)
        };
        let title = if aim.aim_title.is_empty() {
            &aim.aim_description
        } else {
            &aim.aim_title
        };
        let body_text = if aim.aim_details.is_empty() {
            &aim.aim_description
        } else {
            &aim.aim_details
        };
        push(&mut out, ProvisionKind::Aim, &id, title, body_text, "");
    }

    for requirement in &doc.requirements {
        push(
            &mut out,
            ProvisionKind::Requirement,
            &requirement.requirement_id,
            &requirement.title,
            &requirement.requirement_text,
            "",
        );
    }

    out
}

/// Aim numbers appear as JSON numbers in some files and strings in others.
fn number_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Entries missing an identifier or a title are skipped, not erred.
fn push(out: &mut Vec<Provision>, kind: ProvisionKind, id: &str, title: &str, body: &str, category: &str) {
    if id.is_empty() || title.is_empty() {
        return;
    }
    out.push(Provision {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        category: category.to_string(),
        kind,
    });
}
