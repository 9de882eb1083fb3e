//! Wellness recommendation cards
//!
//! Rule-based deck built from the user's most recent daily activity. Three
//! general cards are always present; activity-specific cards follow.

use crate::models::{DailyActivity, RecommendationCategory};
use serde::{Deserialize, Serialize};

/// Water intake (liters) below which the hydration card is added
pub const LOW_WATER_LITERS: f64 = 2.0;
/// Sleep (hours) below which the sleep duration card is added
pub const SHORT_SLEEP_HOURS: f64 = 7.0;
/// Sleep (hours) above which the sleep quality card is added
pub const LONG_SLEEP_HOURS: f64 = 9.0;
/// Calorie intake (kcal) above which the calorie balance card is added
pub const HIGH_CALORIE_INTAKE: f64 = 2500.0;

/// Card content before it is stored for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationCardDraft {
    pub category: RecommendationCategory,
    pub title: String,
    pub content: String,
    pub image_url: String,
}

struct CardText {
    category: RecommendationCategory,
    title: &'static str,
    content: &'static str,
    image_url: &'static str,
}

impl CardText {
    fn draft(&self) -> RecommendationCardDraft {
        RecommendationCardDraft {
            category: self.category,
            title: self.title.to_string(),
            content: self.content.to_string(),
            image_url: self.image_url.to_string(),
        }
    }
}

const SLEEP_ROUTINE: CardText = CardText {
    category: RecommendationCategory::General,
    title: "Düzenli Uyku Alışkanlığı",
    content: "Her gün aynı saatte yatıp kalkmak, uyku kalitenizi artırır ve metabolizmanızı düzenler.",
    image_url: "https://images.pexels.com/photos/3771069/pexels-photo-3771069.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

const HEALTHY_EATING: CardText = CardText {
    category: RecommendationCategory::Nutrition,
    title: "Sağlıklı Beslenme İpuçları",
    content: "Günde en az 5 porsiyon meyve ve sebze tüketmeye çalışın. Çeşitli renklerde sebze ve meyveler farklı vitamin ve mineraller içerir.",
    image_url: "https://images.pexels.com/photos/1640774/pexels-photo-1640774.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

const DAILY_MOVEMENT: CardText = CardText {
    category: RecommendationCategory::Exercise,
    title: "Günlük Hareket Önerisi",
    content: "Günde en az 30 dakika orta yoğunlukta fiziksel aktivite yapın. Bu, yürüyüş, bisiklet veya yüzme gibi aktiviteler olabilir.",
    image_url: "https://images.pexels.com/photos/2294361/pexels-photo-2294361.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

const DRINK_MORE_WATER: CardText = CardText {
    category: RecommendationCategory::Wellness,
    title: "Su Tüketimini Artırın",
    content: "Günlük su tüketiminiz yetersiz görünüyor. Yetişkinler için önerilen günlük su miktarı en az 2 litredir. Su tüketiminizi artırmak için yanınızda her zaman bir su şişesi bulundurun.",
    image_url: "https://images.pexels.com/photos/327090/pexels-photo-327090.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

const SLEEP_LONGER: CardText = CardText {
    category: RecommendationCategory::Wellness,
    title: "Uyku Sürenizi Artırın",
    content: "Uyku süreniz önerilen miktarın altında görünüyor. Yetişkinler için ideal uyku süresi 7-9 saattir. Yeterli uyku, bağışıklık sisteminizi güçlendirir ve genel sağlığınızı iyileştirir.",
    image_url: "https://images.pexels.com/photos/3771115/pexels-photo-3771115.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

const CHECK_SLEEP_QUALITY: CardText = CardText {
    category: RecommendationCategory::Wellness,
    title: "Uyku Kalitenizi Kontrol Edin",
    content: "Uzun uyku süreleri bazen uyku kalitesinin düşük olduğunu gösterebilir. Uyku kalitenizi artırmak için yatak odanızın karanlık, sessiz ve serin olduğundan emin olun.",
    image_url: "https://images.pexels.com/photos/1028741/pexels-photo-1028741.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

const BALANCE_CALORIES: CardText = CardText {
    category: RecommendationCategory::Nutrition,
    title: "Kalori Alımınızı Dengeleyin",
    content: "Kalori alımınız yüksek görünüyor. Beslenmenizde tam tahıllar, sebzeler ve protein kaynaklarına öncelik vererek daha dengeli bir diyet oluşturmayı düşünebilirsiniz.",
    image_url: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
};

/// Build the card deck for a user
pub fn build_recommendation_deck(latest: Option<&DailyActivity>) -> Vec<RecommendationCardDraft> {
    let mut cards = vec![SLEEP_ROUTINE.draft(), HEALTHY_EATING.draft(), DAILY_MOVEMENT.draft()];

    let Some(activity) = latest else {
        return cards;
    };

    if activity.water_intake < LOW_WATER_LITERS {
        cards.push(DRINK_MORE_WATER.draft());
    }

    if activity.sleep_hours < SHORT_SLEEP_HOURS {
        cards.push(SLEEP_LONGER.draft());
    } else if activity.sleep_hours > LONG_SLEEP_HOURS {
        cards.push(CHECK_SLEEP_QUALITY.draft());
    }

    if activity.calorie_intake > HIGH_CALORIE_INTAKE {
        cards.push(BALANCE_CALORIES.draft());
    }

    cards
}
