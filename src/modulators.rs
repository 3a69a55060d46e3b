use serde::Serialize;

/// Systemic tone levels across the regulatory spectrum. Values are
/// normalized activation, not concentrations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneCocktail {
    #[serde(rename = "DA")]
    pub dopamine: f64,
    #[serde(rename = "NE")]
    pub norepinephrine: f64,
    #[serde(rename = "5HT")]
    pub serotonin: f64,
    #[serde(rename = "ACh")]
    pub acetylcholine: f64,
    #[serde(rename = "OT")]
    pub oxytocin: f64,
    #[serde(rename = "CRH")]
    pub corticotropin: f64,
    #[serde(rename = "BDNF")]
    pub neurotrophin: f64,
    #[serde(rename = "ECS")]
    pub endocannabinoid: f64,
    #[serde(rename = "HIST")]
    pub histamine: f64,
}

impl ToneCocktail {
    pub fn baseline() -> Self {
        Self {
            dopamine: 0.5,
            norepinephrine: 0.5,
            serotonin: 0.5,
            acetylcholine: 0.5,
            oxytocin: 0.2,
            corticotropin: 0.1,
            neurotrophin: 0.3,
            endocannabinoid: 0.2,
            histamine: 0.8,
        }
    }
}

impl Default for ToneCocktail {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Mixes the operating tone for a thought mode, then applies the two global
/// dissonance overrides in order: the threat response, then the overload
/// damper.
pub fn mix(thought_mode: &str, dissonance_total: f64) -> ToneCocktail {
    let mut tone = ToneCocktail::baseline();

    match thought_mode {
        "Creative Thought" => {
            tone.dopamine = 0.9;
            tone.norepinephrine = 0.2;
            tone.serotonin = 0.6;
            tone.neurotrophin = 0.8;
        }
        "Critical Thought" => {
            tone.norepinephrine = 0.95;
            tone.dopamine = 0.4;
            tone.acetylcholine = 0.8;
            tone.endocannabinoid = 0.1;
        }
        "Analytical Thought" => {
            tone.acetylcholine = 0.95;
            tone.norepinephrine = 0.6;
            tone.dopamine = 0.6;
        }
        "Social / Empathic Thought" => {
            tone.serotonin = 0.9;
            tone.dopamine = 0.7;
            tone.oxytocin = 0.95;
        }
        _ => {}
    }

    if dissonance_total > 0.8 {
        tone.norepinephrine = 1.0;
        tone.corticotropin = 1.0;
        tone.serotonin = 0.1;
        tone.oxytocin = 0.0;
    }

    if dissonance_total > 0.95 {
        tone.endocannabinoid = 1.0;
        tone.histamine = 0.4;
    }

    tone
}
