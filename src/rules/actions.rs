//! Remediation action catalog
//!
//! Maps rule ids to ordered lists of recommended actions. Lookup is keyed
//! by the stable string id so unrecognized ids from older histories fall
//! back to a generic remediation list instead of an empty one.

/// Generic fallback remediation for unrecognized rule ids
pub const DEFAULT_ACTIONS: &[&str] = &[
    "Schedule an on-site inspection of the hive",
    "Verify the sensor node is mounted and reporting correctly",
    "Compare readings against neighbouring hives before intervening",
];

/// Ordered remediation steps for a rule id
pub fn actions_for(rule_id: &str) -> &'static [&'static str] {
    match rule_id {
        "temp_critica_alta" => &[
            "Provide shade or ventilation immediately",
            "Check for direct sun exposure on the hive body",
            "Open or widen the entrance to improve airflow",
            "Inspect the brood nest for heat stress once the temperature recedes",
        ],
        "temp_alta_preventiva" => &[
            "Watch the temperature trend over the next readings",
            "Improve airflow around the hive stand",
            "Plan shading before the next heat peak",
        ],
        "temp_critica_baja" => &[
            "Add insulation to the hive body",
            "Reduce the entrance to limit drafts",
            "Check cluster position and remaining food stores",
        ],
        "temp_baja_preventiva" => &[
            "Review insulation before the next cold front",
            "Confirm the colony has sufficient stores",
            "Limit inspections to the warmest hours",
        ],
        "humedad_critica_alta" => &[
            "Improve hive ventilation to shed moisture",
            "Tilt the hive slightly forward so condensation drains",
            "Check the lid and joints for leaks",
        ],
        "humedad_alta_preventiva" => &[
            "Increase top ventilation slightly",
            "Watch for condensation under the lid",
        ],
        "humedad_critica_baja" => &[
            "Provide a water source near the apiary",
            "Reduce ventilation to retain moisture",
        ],
        "humedad_baja_preventiva" => &[
            "Watch the humidity trend over the next readings",
            "Check water availability near the apiary",
        ],
        "senal_enjambre" => &[
            "Inspect for queen cells immediately",
            "Search the apiary surroundings for a clustered swarm",
            "Add space or split the colony if congested",
        ],
        "oportunidad_cosecha" => &[
            "Inspect the supers for capped honey",
            "Plan a harvest visit",
            "Prepare extraction equipment",
        ],
        "temperatura_anormal" => &[
            "Inspect the colony urgently: it may have collapsed or absconded",
            "Verify the interior sensor sits inside the cluster",
            "Check for queen loss",
        ],
        "humedad_anormal" => &[
            "Inspect the colony urgently: it may have collapsed or absconded",
            "Cross-check temperature readings from the same hive",
            "Verify sensor placement and hive seals",
        ],
        _ => DEFAULT_ACTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::catalog::RULES;

    #[test]
    fn test_every_catalog_rule_has_specific_actions() {
        for def in RULES {
            let actions = actions_for(def.id.as_str());
            assert!(!actions.is_empty());
            assert_ne!(
                actions.as_ptr(),
                DEFAULT_ACTIONS.as_ptr(),
                "rule {} fell back to the default list",
                def.id
            );
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_default() {
        let actions = actions_for("no_such_rule");
        assert_eq!(actions, DEFAULT_ACTIONS);
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn test_actions_are_ordered_lists() {
        let actions = actions_for("senal_enjambre");
        assert!(actions[0].contains("queen cells"));
    }
}
