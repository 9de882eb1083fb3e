//! Daily achievement analysis
//!
//! Scores one day of intake, water and sleep against a program's nutrition
//! targets. Every metric is classified on its own; a metric yields at most
//! one achievement or one recommendation, and some ranges yield neither
//! (water between 2.0 and 2.5 L, fat below its band).

use crate::errors::{EngineError, EngineResult};
use crate::health_metrics::round_half_up;
use crate::models::{AnalysisResult, DailyIntake, NutritionTargets};
use crate::validation::{
    check_field, validate_calories, validate_macro_grams, validate_sleep_hours,
    validate_water_liters,
};
use serde::{Deserialize, Serialize};

/// User-facing texts produced by the analyzer
pub mod messages {
    pub const HEADER: &str = "Günlük beslenme ve aktivite analizi:";
    pub const ACHIEVEMENTS_HEADING: &str = "Başarılarınız:";
    pub const RECOMMENDATIONS_HEADING: &str = "Öneriler:";

    pub const CALORIES_ACHIEVED: &str = "Günlük kalori hedefinize ulaştınız! 🎯";
    pub const CALORIES_INCREASE: &str = "Kalori alımınızı artırmanız önerilir.";
    pub const CALORIES_DECREASE: &str = "Kalori alımınızı azaltmanız önerilir.";

    pub const PROTEIN_ACHIEVED: &str = "Protein hedefini başarıyla tamamladınız! 💪";
    pub const PROTEIN_INCREASE: &str = "Daha fazla protein tüketmelisiniz. Yumurta, tavuk, balık gibi protein kaynaklarını tercih edin.";

    pub const CARBS_ACHIEVED: &str = "Karbonhidrat dengenizi iyi koruyorsunuz! 🌟";
    pub const CARBS_INCREASE: &str = "Kompleks karbonhidrat alımınızı artırın. Tam tahılları tercih edin.";
    pub const CARBS_DECREASE: &str = "Karbonhidrat alımınızı azaltın ve daha çok protein tüketmeye odaklanın.";

    pub const FAT_ACHIEVED: &str = "Yağ tüketiminiz hedef aralıkta! 👍";
    pub const FAT_DECREASE: &str = "Yağ alımınızı azaltın. Daha az işlenmiş gıda tüketin.";

    pub const WATER_ACHIEVED: &str = "Günlük su tüketim hedefinizi aştınız! 💧";
    pub const WATER_INCREASE: &str = "Su tüketiminizi artırın. Günde en az 2.5 litre su içmeyi hedefleyin.";

    pub const SLEEP_ACHIEVED: &str = "İdeal uyku süresine ulaştınız! 😴";
    pub const SLEEP_INCREASE: &str = "Daha fazla uyumaya çalışın. İdeal uyku süresi 7-9 saat arasıdır.";
    pub const SLEEP_CHECK_QUALITY: &str = "Uyku kalitenizi kontrol edin. 9 saatten uzun uyku, uyku kalitesinin düşük olduğunu gösterebilir.";
}

/// Water intake (liters) at or above which the day counts as achieved
pub const WATER_TARGET_LITERS: f64 = 2.5;
/// Water intake (liters) below which more water is recommended
pub const WATER_MINIMUM_LITERS: f64 = 2.0;
/// Ideal sleep window in hours, inclusive
pub const SLEEP_RANGE_HOURS: (f64, f64) = (7.0, 9.0);

/// Outcome of classifying one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Achieved(&'static str),
    Recommend(&'static str),
    Neutral,
}

pub fn classify_calories(percent: f64) -> Verdict {
    if (percent - 100.0).abs() <= 10.0 {
        Verdict::Achieved(messages::CALORIES_ACHIEVED)
    } else if percent < 90.0 {
        Verdict::Recommend(messages::CALORIES_INCREASE)
    } else if percent > 110.0 {
        Verdict::Recommend(messages::CALORIES_DECREASE)
    } else {
        Verdict::Neutral
    }
}

pub fn classify_protein(percent: f64) -> Verdict {
    if percent >= 90.0 {
        Verdict::Achieved(messages::PROTEIN_ACHIEVED)
    } else {
        Verdict::Recommend(messages::PROTEIN_INCREASE)
    }
}

pub fn classify_carbs(percent: f64) -> Verdict {
    if (percent - 100.0).abs() <= 15.0 {
        Verdict::Achieved(messages::CARBS_ACHIEVED)
    } else if percent < 85.0 {
        Verdict::Recommend(messages::CARBS_INCREASE)
    } else if percent > 115.0 {
        Verdict::Recommend(messages::CARBS_DECREASE)
    } else {
        Verdict::Neutral
    }
}

pub fn classify_fat(percent: f64) -> Verdict {
    if (percent - 100.0).abs() <= 15.0 {
        Verdict::Achieved(messages::FAT_ACHIEVED)
    } else if percent > 115.0 {
        Verdict::Recommend(messages::FAT_DECREASE)
    } else {
        Verdict::Neutral
    }
}

pub fn classify_water(liters: f64) -> Verdict {
    if liters >= WATER_TARGET_LITERS {
        Verdict::Achieved(messages::WATER_ACHIEVED)
    } else if liters < WATER_MINIMUM_LITERS {
        Verdict::Recommend(messages::WATER_INCREASE)
    } else {
        Verdict::Neutral
    }
}

pub fn classify_sleep(hours: f64) -> Verdict {
    let (min, max) = SLEEP_RANGE_HOURS;
    if (min..=max).contains(&hours) {
        Verdict::Achieved(messages::SLEEP_ACHIEVED)
    } else if hours < min {
        Verdict::Recommend(messages::SLEEP_INCREASE)
    } else {
        Verdict::Recommend(messages::SLEEP_CHECK_QUALITY)
    }
}

/// `actual / target * 100`, rejecting a non-positive target
pub fn achievement_percent(field: &str, actual: f64, target: i32) -> EngineResult<f64> {
    if target <= 0 {
        return Err(EngineError::InvalidTarget(format!(
            "{} target must be positive, got {}",
            field, target
        )));
    }
    Ok(actual / f64::from(target) * 100.0)
}

fn check_intake(actual: &DailyIntake) -> EngineResult<()> {
    check_field("actual_calories", validate_calories(actual.calories))?;
    check_field("actual_protein", validate_macro_grams(actual.protein))?;
    check_field("actual_carbs", validate_macro_grams(actual.carbs))?;
    check_field("actual_fat", validate_macro_grams(actual.fat))?;
    check_field("water_intake", validate_water_liters(actual.water_intake))?;
    check_field("sleep_hours", validate_sleep_hours(actual.sleep_hours))?;
    Ok(())
}

/// Analyze one day against the program targets
pub fn analyze(actual: &DailyIntake, targets: &NutritionTargets) -> EngineResult<AnalysisResult> {
    check_intake(actual)?;

    let calories = achievement_percent("calorie", actual.calories, targets.calories)?;
    let protein = achievement_percent("protein", actual.protein, targets.protein)?;
    let carbs = achievement_percent("carbs", actual.carbs, targets.carbs)?;
    let fat = achievement_percent("fat", actual.fat, targets.fat)?;

    let verdicts = [
        classify_calories(calories),
        classify_protein(protein),
        classify_carbs(carbs),
        classify_fat(fat),
        classify_water(actual.water_intake),
        classify_sleep(actual.sleep_hours),
    ];

    let mut achievements = Vec::new();
    let mut recommendations = Vec::new();
    for verdict in verdicts {
        match verdict {
            Verdict::Achieved(text) => achievements.push(text.to_string()),
            Verdict::Recommend(text) => recommendations.push(text.to_string()),
            Verdict::Neutral => {}
        }
    }

    let analysis = compose_analysis(&achievements, &recommendations);

    Ok(AnalysisResult {
        analysis,
        recommendations,
        achievements,
        calorie_achievement: round_half_up(calories),
        protein_achievement: round_half_up(protein),
        carbs_achievement: round_half_up(carbs),
        fat_achievement: round_half_up(fat),
    })
}

/// Render the summary text shown above a day's log
pub fn compose_analysis(achievements: &[String], recommendations: &[String]) -> String {
    let mut text = format!("{}\n\n", messages::HEADER);

    if !achievements.is_empty() {
        text.push_str(messages::ACHIEVEMENTS_HEADING);
        text.push_str("\n- ");
        text.push_str(&achievements.join("\n- "));
        text.push_str("\n\n");
    }

    if !recommendations.is_empty() {
        text.push_str(messages::RECOMMENDATIONS_HEADING);
        text.push_str("\n- ");
        text.push_str(&recommendations.join("\n- "));
    }

    text
}

// ============================================================================
// Display badges
// ============================================================================

/// Badge rendered next to a macro percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementBadge {
    OnTarget,
    Low,
    High,
}

impl AchievementBadge {
    /// 90-110% is on target
    pub fn from_percentage(percent: f64) -> Self {
        if (90.0..=110.0).contains(&percent) {
            AchievementBadge::OnTarget
        } else if percent < 90.0 {
            AchievementBadge::Low
        } else {
            AchievementBadge::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementBadge::OnTarget => "Hedefte",
            AchievementBadge::Low => "Düşük",
            AchievementBadge::High => "Yüksek",
        }
    }
}
