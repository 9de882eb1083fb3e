//! Program templates
//!
//! Fixed per-goal exercise lists and nutrition advice. The content is shown
//! to users verbatim, so names, set and rep counts are part of the contract.

use crate::models::{Exercise, Goal};

/// Static exercise row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub sets: u32,
    pub reps: u32,
    pub description: &'static str,
}

impl ExerciseTemplate {
    pub fn to_exercise(&self) -> Exercise {
        Exercise {
            name: self.name.to_string(),
            sets: self.sets,
            reps: self.reps,
            description: self.description.to_string(),
        }
    }
}

/// Exercises and recommendations for one goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramTemplate {
    pub exercises: &'static [ExerciseTemplate],
    pub recommendations: &'static [&'static str],
}

const LOSE_EXERCISES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Yürüyüş/Koşu",
        sets: 1,
        reps: 30,
        description: "30 dakika tempolu yürüyüş veya koşu",
    },
    ExerciseTemplate {
        name: "Squat",
        sets: 3,
        reps: 15,
        description: "Bacak kaslarını çalıştıran temel egzersiz",
    },
    ExerciseTemplate {
        name: "Push-up",
        sets: 3,
        reps: 10,
        description: "Göğüs, omuz ve kol kaslarını çalıştıran egzersiz",
    },
    ExerciseTemplate {
        name: "Plank",
        sets: 3,
        reps: 30,
        description: "30 saniye boyunca plank pozisyonunda kalın",
    },
    ExerciseTemplate {
        name: "Jumping Jacks",
        sets: 3,
        reps: 20,
        description: "Tüm vücudu çalıştıran kardiyovasküler egzersiz",
    },
];

const LOSE_RECOMMENDATIONS: &[&str] = &[
    "Günde en az 2 litre su için",
    "Şekerli içeceklerden kaçının",
    "Öğün aralarında protein ağırlıklı atıştırmalıklar tercih edin",
    "Akşam 8'den sonra yemek yemeyin",
    "Haftada en az 3-4 gün kardiyovasküler egzersiz yapın",
];

const GAIN_EXERCISES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Bench Press",
        sets: 4,
        reps: 8,
        description: "Göğüs kaslarını geliştiren temel egzersiz",
    },
    ExerciseTemplate {
        name: "Deadlift",
        sets: 4,
        reps: 6,
        description: "Sırt, bacak ve kalça kaslarını çalıştıran egzersiz",
    },
    ExerciseTemplate {
        name: "Squat",
        sets: 4,
        reps: 8,
        description: "Bacak kaslarını geliştiren temel egzersiz",
    },
    ExerciseTemplate {
        name: "Shoulder Press",
        sets: 3,
        reps: 10,
        description: "Omuz kaslarını geliştiren egzersiz",
    },
    ExerciseTemplate {
        name: "Pull-ups",
        sets: 3,
        reps: 8,
        description: "Sırt ve kol kaslarını geliştiren egzersiz",
    },
];

const GAIN_RECOMMENDATIONS: &[&str] = &[
    "Günde 5-6 öğün yemeye çalışın",
    "Her öğünde protein tüketin",
    "Yatmadan önce protein shake içebilirsiniz",
    "Kompleks karbonhidratlar tüketin (tam tahıllar, patates, pirinç)",
    "Antrenman sonrası karbonhidrat ve protein içeren bir öğün tüketin",
];

const MAINTAIN_EXERCISES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Karışık Kardiyovasküler Egzersiz",
        sets: 1,
        reps: 20,
        description: "20 dakika tempolu yürüyüş, koşu veya bisiklet",
    },
    ExerciseTemplate {
        name: "Push-up",
        sets: 3,
        reps: 12,
        description: "Göğüs, omuz ve kol kaslarını çalıştıran egzersiz",
    },
    ExerciseTemplate {
        name: "Bodyweight Squat",
        sets: 3,
        reps: 15,
        description: "Bacak kaslarını çalıştıran temel egzersiz",
    },
    ExerciseTemplate {
        name: "Plank",
        sets: 3,
        reps: 45,
        description: "45 saniye boyunca plank pozisyonunda kalın",
    },
    ExerciseTemplate {
        name: "Dumbbell Row",
        sets: 3,
        reps: 12,
        description: "Sırt kaslarını çalıştıran egzersiz",
    },
];

const MAINTAIN_RECOMMENDATIONS: &[&str] = &[
    "Dengeli ve çeşitli beslenin",
    "Günde en az 2 litre su için",
    "İşlenmiş gıdalardan kaçının",
    "Haftada en az 3 gün egzersiz yapın",
    "Yeterli uyku almaya özen gösterin (7-8 saat)",
];

/// Look up the template for a goal
pub fn template_for(goal: Goal) -> ProgramTemplate {
    match goal {
        Goal::Lose => ProgramTemplate {
            exercises: LOSE_EXERCISES,
            recommendations: LOSE_RECOMMENDATIONS,
        },
        Goal::Gain => ProgramTemplate {
            exercises: GAIN_EXERCISES,
            recommendations: GAIN_RECOMMENDATIONS,
        },
        Goal::Maintain => ProgramTemplate {
            exercises: MAINTAIN_EXERCISES,
            recommendations: MAINTAIN_RECOMMENDATIONS,
        },
    }
}

/// Owned exercises and recommendation texts for a goal
pub fn select_template(goal: Goal) -> (Vec<Exercise>, Vec<String>) {
    let template = template_for(goal);
    let exercises = template.exercises.iter().map(ExerciseTemplate::to_exercise).collect();
    let recommendations = template.recommendations.iter().map(|r| r.to_string()).collect();
    (exercises, recommendations)
}
