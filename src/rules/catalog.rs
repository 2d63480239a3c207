//! Static rule catalog
//!
//! The catalog is the single authoritative definition of every alert rule:
//! identifier, dimension, priority, seasonal gate, evaluation kind, and the
//! numeric thresholds that define user-visible alerting behavior. Rules are
//! defined once at process start and are not user-editable.

use crate::alerts::{Dimension, Priority};
use crate::domain::SeasonalContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum qualifying readings before a sustained rule fires
///
/// Debounces single-sample spikes: a lone bad reading inside the window
/// never raises an alert on its own.
pub const MIN_SUSTAINED_EVENTS: usize = 8;

/// Stable rule identifiers
///
/// The string forms are the upstream API contract: they key deduplication,
/// history, and the remediation-action catalog, so they are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    TempCriticaAlta,
    TempAltaPreventiva,
    TempCriticaBaja,
    TempBajaPreventiva,
    HumedadCriticaAlta,
    HumedadAltaPreventiva,
    HumedadCriticaBaja,
    HumedadBajaPreventiva,
    SenalEnjambre,
    OportunidadCosecha,
    TemperaturaAnormal,
    HumedadAnormal,
}

impl RuleId {
    /// Stable string form used for dedup keys and action lookup
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TempCriticaAlta => "temp_critica_alta",
            Self::TempAltaPreventiva => "temp_alta_preventiva",
            Self::TempCriticaBaja => "temp_critica_baja",
            Self::TempBajaPreventiva => "temp_baja_preventiva",
            Self::HumedadCriticaAlta => "humedad_critica_alta",
            Self::HumedadAltaPreventiva => "humedad_alta_preventiva",
            Self::HumedadCriticaBaja => "humedad_critica_baja",
            Self::HumedadBajaPreventiva => "humedad_baja_preventiva",
            Self::SenalEnjambre => "senal_enjambre",
            Self::OportunidadCosecha => "oportunidad_cosecha",
            Self::TemperaturaAnormal => "temperatura_anormal",
            Self::HumedadAnormal => "humedad_anormal",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value predicate for threshold rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Value strictly greater than threshold
    GreaterThan(f64),
    /// Value strictly less than threshold
    LessThan(f64),
    /// Value within range, inclusive on both ends
    InRange(f64, f64),
}

impl Condition {
    /// Evaluate condition against a value
    pub fn evaluate(&self, value: f64) -> bool {
        match self {
            Self::GreaterThan(threshold) => value > *threshold,
            Self::LessThan(threshold) => value < *threshold,
            Self::InRange(min, max) => value >= *min && value <= *max,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreaterThan(v) => write!(f, "> {}", v),
            Self::LessThan(v) => write!(f, "< {}", v),
            Self::InRange(min, max) => write!(f, "in [{}, {}]", min, max),
        }
    }
}

/// Seasonal precondition restricting when a rule may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonGate {
    /// No seasonal restriction
    Always,
    Overwintering,
    SpringSummer,
    SwarmSeason,
    HarvestSeason,
}

impl SeasonGate {
    /// Whether the gate admits evaluation under this context
    pub fn permits(&self, season: &SeasonalContext) -> bool {
        match self {
            Self::Always => true,
            Self::Overwintering => season.overwintering,
            Self::SpringSummer => season.spring_summer,
            Self::SwarmSeason => season.swarm_season,
            Self::HarvestSeason => season.harvest_season,
        }
    }
}

impl fmt::Display for SeasonGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "always"),
            Self::Overwintering => write!(f, "overwintering"),
            Self::SpringSummer => write!(f, "spring/summer"),
            Self::SwarmSeason => write!(f, "swarm season"),
            Self::HarvestSeason => write!(f, "harvest season"),
        }
    }
}

/// How a rule consumes the reading window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Count qualifying interior readings over a trailing window
    Sustained {
        window_hours: i64,
        min_events: usize,
        condition: Condition,
    },
    /// Latest interior reading only
    Instantaneous { condition: Condition },
    /// Drop between the two most recent weight readings
    WeightDrop { min_drop_grams: f64 },
    /// Gain between oldest and newest of the last `span` weight readings
    WeightGain { span: usize, min_gain_grams: f64 },
    /// Interior and exterior streams converging within a trailing window
    StreamConvergence { window_hours: i64, max_delta: f64 },
}

/// One alert rule: metadata plus the predicate the interpreter applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleDef {
    pub id: RuleId,
    /// Human-readable name
    pub name: &'static str,
    pub dimension: Dimension,
    pub priority: Priority,
    pub gate: SeasonGate,
    pub kind: RuleKind,
    /// Critical counterpart whose firing suppresses this rule for the cycle
    pub suppressed_by: Option<RuleId>,
    /// Human text describing the triggering condition
    pub summary: &'static str,
    /// Unit of the observed value
    pub unit: &'static str,
}

/// The authoritative rule table
///
/// Thresholds are the behavioral contract; they must match the deployed
/// alerting behavior exactly.
pub static RULES: &[RuleDef] = &[
    RuleDef {
        id: RuleId::TempCriticaAlta,
        name: "Critical high brood temperature",
        dimension: Dimension::Temperature,
        priority: Priority::Critical,
        gate: SeasonGate::Always,
        kind: RuleKind::Sustained {
            window_hours: 24,
            min_events: MIN_SUSTAINED_EVENTS,
            condition: Condition::GreaterThan(38.0),
        },
        suppressed_by: None,
        summary: "interior temperature above 38°C sustained over 24h",
        unit: "°C",
    },
    RuleDef {
        id: RuleId::TempAltaPreventiva,
        name: "Elevated brood temperature",
        dimension: Dimension::Temperature,
        priority: Priority::Preventive,
        gate: SeasonGate::Always,
        kind: RuleKind::Sustained {
            window_hours: 48,
            min_events: MIN_SUSTAINED_EVENTS,
            condition: Condition::InRange(36.0, 37.0),
        },
        suppressed_by: Some(RuleId::TempCriticaAlta),
        summary: "interior temperature between 36°C and 37°C sustained over 48h",
        unit: "°C",
    },
    RuleDef {
        id: RuleId::TempCriticaBaja,
        name: "Critical low cluster temperature",
        dimension: Dimension::Temperature,
        priority: Priority::Critical,
        gate: SeasonGate::Overwintering,
        kind: RuleKind::Sustained {
            window_hours: 48,
            min_events: MIN_SUSTAINED_EVENTS,
            condition: Condition::LessThan(12.0),
        },
        suppressed_by: None,
        summary: "interior temperature below 12°C sustained over 48h while overwintering",
        unit: "°C",
    },
    RuleDef {
        id: RuleId::TempBajaPreventiva,
        name: "Low cluster temperature",
        dimension: Dimension::Temperature,
        priority: Priority::Preventive,
        gate: SeasonGate::Overwintering,
        kind: RuleKind::Sustained {
            window_hours: 48,
            min_events: MIN_SUSTAINED_EVENTS,
            condition: Condition::InRange(13.0, 15.0),
        },
        suppressed_by: Some(RuleId::TempCriticaBaja),
        summary: "interior temperature between 13°C and 15°C sustained over 48h while overwintering",
        unit: "°C",
    },
    RuleDef {
        id: RuleId::HumedadCriticaAlta,
        name: "Critical high hive humidity",
        dimension: Dimension::Humidity,
        priority: Priority::Critical,
        gate: SeasonGate::Overwintering,
        kind: RuleKind::Instantaneous {
            condition: Condition::GreaterThan(70.0),
        },
        suppressed_by: None,
        summary: "interior humidity above 70% while overwintering",
        unit: "%",
    },
    RuleDef {
        id: RuleId::HumedadAltaPreventiva,
        name: "Elevated hive humidity",
        dimension: Dimension::Humidity,
        priority: Priority::Preventive,
        gate: SeasonGate::Overwintering,
        kind: RuleKind::Instantaneous {
            condition: Condition::GreaterThan(60.0),
        },
        suppressed_by: Some(RuleId::HumedadCriticaAlta),
        summary: "interior humidity above 60% while overwintering",
        unit: "%",
    },
    RuleDef {
        id: RuleId::HumedadCriticaBaja,
        name: "Critical low hive humidity",
        dimension: Dimension::Humidity,
        priority: Priority::Critical,
        gate: SeasonGate::SpringSummer,
        kind: RuleKind::Instantaneous {
            condition: Condition::LessThan(40.0),
        },
        suppressed_by: None,
        summary: "interior humidity below 40% during spring/summer",
        unit: "%",
    },
    RuleDef {
        id: RuleId::HumedadBajaPreventiva,
        name: "Low hive humidity",
        dimension: Dimension::Humidity,
        priority: Priority::Preventive,
        gate: SeasonGate::SpringSummer,
        kind: RuleKind::Instantaneous {
            condition: Condition::LessThan(50.0),
        },
        suppressed_by: Some(RuleId::HumedadCriticaBaja),
        summary: "interior humidity below 50% during spring/summer",
        unit: "%",
    },
    RuleDef {
        id: RuleId::SenalEnjambre,
        name: "Swarm departure signal",
        dimension: Dimension::Weight,
        priority: Priority::High,
        gate: SeasonGate::SwarmSeason,
        kind: RuleKind::WeightDrop {
            min_drop_grams: 500.0,
        },
        suppressed_by: None,
        summary: "hive weight dropped 500g or more between consecutive readings",
        unit: "g",
    },
    RuleDef {
        id: RuleId::OportunidadCosecha,
        name: "Harvest opportunity",
        dimension: Dimension::Weight,
        priority: Priority::Informational,
        gate: SeasonGate::HarvestSeason,
        kind: RuleKind::WeightGain {
            span: 20,
            min_gain_grams: 20_000.0,
        },
        suppressed_by: None,
        summary: "hive weight gained more than 20kg over the last 20 readings",
        unit: "g",
    },
    RuleDef {
        id: RuleId::TemperaturaAnormal,
        name: "Abnormal temperature (colony loss signal)",
        dimension: Dimension::Temperature,
        priority: Priority::Critical,
        gate: SeasonGate::Always,
        kind: RuleKind::StreamConvergence {
            window_hours: 6,
            max_delta: 2.0,
        },
        suppressed_by: None,
        summary: "interior temperature within 2°C of exterior: colony may no longer be regulating",
        unit: "°C",
    },
    RuleDef {
        id: RuleId::HumedadAnormal,
        name: "Abnormal humidity (colony loss signal)",
        dimension: Dimension::Humidity,
        priority: Priority::Critical,
        gate: SeasonGate::Always,
        kind: RuleKind::StreamConvergence {
            window_hours: 6,
            max_delta: 2.0,
        },
        suppressed_by: None,
        summary: "interior humidity within 2 points of exterior: colony may no longer be regulating",
        unit: "%",
    },
];

/// All rules in the catalog
pub fn rules() -> &'static [RuleDef] {
    RULES
}

/// Look up a rule by id
pub fn rule(id: RuleId) -> &'static RuleDef {
    RULES
        .iter()
        .find(|r| r.id == id)
        .expect("every RuleId has a catalog entry")
}
