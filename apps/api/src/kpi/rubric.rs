//! Static per-role scoring rubrics: KPI display names and the survey weight
//! tables behind fallback scoring.
//!
//! The tables are process-wide constants, authored by hand and never mutated
//! at runtime. Authoring invariants (each question sums to 1.0, every KPI
//! receives at least one contribution) are enforced by the tests below.

use crate::kpi::role::Role;

/// Fixed number of KPIs per role.
pub const KPI_COUNT: u8 = 10;

/// Weight table for one survey question: (kpi_id, weight) pairs.
/// A question may contribute fully or partially to any subset of the ten
/// KPIs; the same KPI can appear in several questions with different weights.
pub struct QuestionWeights {
    pub label: &'static str,
    pub weights: &'static [(u8, f64)],
}

/// One role's full rubric: display names indexed by KPI id and the five
/// survey question tables.
pub struct RoleRubric {
    pub names: [&'static str; 10],
    pub questions: [QuestionWeights; 5],
}

impl RoleRubric {
    /// Display name for a KPI id. Ids outside the rubric get a generated
    /// placeholder.
    pub fn kpi_name(&self, kpi_id: u8) -> String {
        kpi_id
            .checked_sub(1)
            .and_then(|i| self.names.get(i as usize))
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("KPI {kpi_id}"))
    }
}

impl Role {
    pub fn rubric(&self) -> &'static RoleRubric {
        match self {
            Role::Backend => &BACKEND,
            Role::Frontend => &FRONTEND,
            Role::Pm => &PM,
            Role::Designer => &DESIGNER,
        }
    }
}

pub static BACKEND: RoleRubric = RoleRubric {
    names: [
        "Core language & framework proficiency",
        "REST API design & implementation",
        "Database & data modeling",
        "Architecture design",
        "Cloud & DevOps fluency",
        "Performance & traffic optimization",
        "Security, auth & access control",
        "Testing & code quality",
        "Collaboration, documentation & decision records",
        "Operations, monitoring & incident response",
    ],
    questions: [
        QuestionWeights {
            label: "Incident & problem resolution",
            weights: &[(10, 0.45), (6, 0.25), (9, 0.20), (4, 0.10)],
        },
        QuestionWeights {
            label: "Feature design & collaboration",
            weights: &[(2, 0.35), (3, 0.25), (4, 0.20), (9, 0.20)],
        },
        QuestionWeights {
            label: "Deployment & operations fluency",
            weights: &[(5, 0.45), (10, 0.25), (7, 0.15), (8, 0.15)],
        },
        QuestionWeights {
            label: "Quality & improvement culture",
            weights: &[(8, 0.45), (9, 0.25), (1, 0.15), (2, 0.15)],
        },
        QuestionWeights {
            label: "Problem-solving approach",
            weights: &[(6, 0.30), (8, 0.25), (4, 0.20), (9, 0.15), (3, 0.10)],
        },
    ],
};

pub static FRONTEND: RoleRubric = RoleRubric {
    names: [
        "Web fundamentals",
        "Framework proficiency",
        "State management & component architecture",
        "Web performance optimization",
        "API integration & async handling",
        "Responsive & cross-browser support",
        "Test code & quality management",
        "Git, PR & collaboration process",
        "User-centered UI development",
        "Build & tooling fluency",
    ],
    questions: [
        QuestionWeights {
            label: "Component design & state management",
            weights: &[(3, 0.40), (2, 0.25), (1, 0.20), (8, 0.15)],
        },
        QuestionWeights {
            label: "API integration & async flows",
            weights: &[(5, 0.40), (3, 0.20), (9, 0.20), (1, 0.20)],
        },
        QuestionWeights {
            label: "Performance optimization experience",
            weights: &[(4, 0.45), (1, 0.20), (10, 0.20), (2, 0.15)],
        },
        QuestionWeights {
            label: "User-centered UI work",
            weights: &[(9, 0.45), (1, 0.20), (6, 0.20), (8, 0.15)],
        },
        QuestionWeights {
            label: "Quality management & collaboration culture",
            weights: &[(7, 0.40), (8, 0.30), (2, 0.15), (10, 0.15)],
        },
    ],
};

pub static PM: RoleRubric = RoleRubric {
    names: [
        "Problem definition & hypothesis building",
        "Data-driven decision making",
        "Service structure & core flow decisions",
        "Requirements definition & policy design",
        "Experiment-driven validation",
        "Priority & scope management",
        "Execution & ownership",
        "Decision alignment & cross-team coordination",
        "Stakeholder communication",
        "User research & empathy",
    ],
    questions: [
        QuestionWeights {
            label: "Problem definition & hypothesis building",
            weights: &[(1, 0.40), (2, 0.25), (10, 0.20), (7, 0.15)],
        },
        QuestionWeights {
            label: "Data-driven judgment & prioritization",
            weights: &[(2, 0.45), (6, 0.25), (1, 0.15), (8, 0.15)],
        },
        QuestionWeights {
            label: "Service structure & core flow decisions",
            weights: &[(3, 0.45), (4, 0.20), (8, 0.20), (7, 0.15)],
        },
        QuestionWeights {
            label: "Requirements & policy documentation",
            weights: &[(4, 0.45), (3, 0.20), (8, 0.20), (9, 0.15)],
        },
        QuestionWeights {
            label: "Experiment-driven decision making",
            weights: &[(5, 0.40), (2, 0.25), (1, 0.20), (7, 0.15)],
        },
    ],
};

pub static DESIGNER: RoleRubric = RoleRubric {
    names: [
        "UX strategy & problem reframing",
        "Information architecture & user flows",
        "UI visual design & polish",
        "Prototyping & interaction",
        "Design system building & operation",
        "Data-driven UX improvement",
        "Usability & accessibility",
        "Multi-platform (OS, web, app) fluency",
        "Collaboration & communication",
        "Brand experience (BX/BI) design",
    ],
    questions: [
        QuestionWeights {
            label: "Problem reframing & UX strategy",
            weights: &[(1, 0.45), (2, 0.20), (9, 0.20), (10, 0.15)],
        },
        QuestionWeights {
            label: "Information architecture & user flows",
            weights: &[(2, 0.45), (1, 0.20), (8, 0.20), (9, 0.15)],
        },
        QuestionWeights {
            label: "Prototyping & interaction validation",
            weights: &[(4, 0.40), (3, 0.20), (1, 0.20), (7, 0.20)],
        },
        QuestionWeights {
            label: "Design system & collaboration structure",
            weights: &[(5, 0.45), (3, 0.20), (9, 0.20), (8, 0.15)],
        },
        QuestionWeights {
            label: "Evidence-based UX improvement",
            weights: &[(6, 0.40), (1, 0.20), (9, 0.20), (4, 0.20)],
        },
    ],
};
