use std::collections::HashMap;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityEvent, Actor, ActorRole};
use crate::carousel::Testimonial;
use crate::error::BoardResult;
use crate::roster::{Booster, Client, Order, OrderStatus, Presence, Rank, Tier};

/// 가짜 데이터셋 (데모/테스트용 초기 데이터)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FakeDataset {
    pub orders: Vec<Order>,
    /// 주문 ID별 활동 기록
    pub activities: HashMap<String, Vec<Activity>>,
    pub testimonials: Vec<Testimonial>,
}

impl Default for FakeDataset {
    fn default() -> Self {
        let now = Utc::now();
        let avatar = |seed: &str| format!("https://i.pravatar.cc/150?u={}", seed);

        let orders = vec![
            Order::new(
                "ORD-1234",
                Client::new("client1", "JohnDoe", avatar("client1")),
                Booster::new("booster1", "RankHero", avatar("booster1"), Presence::Online),
                "Rank Boost",
                Rank::new(Tier::Silver, 3),
                Rank::new(Tier::Gold, 4),
            )
            .with_id("1")
            .with_status(OrderStatus::InProgress)
            .with_progress(45)
            .with_price(50.0, "2 days")
            .with_timestamps(now - Duration::days(2), now - Duration::hours(2))
            .with_chat_activity(true)
            .with_notes(
                "League of Legends rank boost from Silver III to Gold IV. Player prefers safe play style.",
                "I want to reach Gold before the season ends. Please use champions in my pool.",
            )
            .with_requirements([
                "Use champions in client pool when possible",
                "Play safe to avoid reports",
                "Maximum 3 games per day",
                "Avoid chatting in game",
            ]),
            Order::new(
                "ORD-5678",
                Client::new("client2", "JaneSmith", avatar("client2")),
                Booster::new("booster2", "DuoKing", avatar("booster2"), Presence::Away),
                "Placement Matches",
                Rank::new(Tier::Unranked, 0),
                Rank::new(Tier::Platinum, 4),
            )
            .with_id("2")
            .with_price(75.0, "3 days")
            .with_timestamps(now - Duration::hours(6), now - Duration::hours(6))
            .with_notes(
                "Complete 10 placement matches in League of Legends with at least 7 wins.",
                "I prefer winning over playing specific champions. Get me the best possible placement.",
            )
            .with_requirements([
                "Focus on winning, champion choice is flexible",
                "Play during off-peak hours for better matchmaking",
                "Complete within 3 days",
            ]),
            Order::new(
                "ORD-9012",
                Client::new("client3", "AlexTaylor", avatar("client3")),
                Booster::new("booster3", "EliteBoost", avatar("booster3"), Presence::Online),
                "Duo Boost",
                Rank::new(Tier::Gold, 2),
                Rank::new(Tier::Platinum, 3),
            )
            .with_id("3")
            .with_status(OrderStatus::Completed)
            .with_progress(100)
            .with_price(120.0, "4 days")
            .with_timestamps(now - Duration::days(5), now - Duration::hours(12))
            .with_notes(
                "Duo boost from Gold II to Platinum III. Client will play alongside the booster.",
                "I main support and can play Lulu, Nami, Janna, and Thresh. I would like to duo with an ADC.",
            )
            .with_requirements([
                "Schedule duo sessions in advance",
                "Voice chat preferred but not mandatory",
                "Be patient with mistakes",
                "Focus on improvement and communication",
            ]),
            Order::new(
                "ORD-3456",
                Client::new("client4", "SamJohnson", avatar("client4")),
                Booster::new("booster4", "VictoryStreak", avatar("booster4"), Presence::Offline),
                "Valorant Rank Boost",
                Rank::new(Tier::Bronze, 1),
                Rank::new(Tier::Silver, 3),
            )
            .with_id("4")
            .with_status(OrderStatus::Paused)
            .with_progress(35)
            .with_price(65.0, "5 days")
            .with_timestamps(now - Duration::days(3), now - Duration::hours(4))
            .with_chat_activity(true)
            .with_notes(
                "Valorant rank boost from Bronze I to Silver III. Looking for consistent performance.",
                "Account has all agents unlocked. Please play any agent that gives the best chance of winning.",
            )
            .with_requirements([
                "Win at least 60% of games",
                "No more than 5 games per day",
                "Preferably play during evening hours",
            ]),
            Order::new(
                "ORD-7890",
                Client::new("client5", "EmilyWilson", avatar("client5")),
                Booster::new("booster5", "LegendaryCarry", avatar("booster5"), Presence::Offline),
                "Wild Rift Boost",
                Rank::new(Tier::Diamond, 4),
                Rank::new(Tier::Master, 0),
            )
            .with_id("5")
            .with_status(OrderStatus::Cancelled)
            .with_progress(10)
            .with_price(200.0, "7 days")
            .with_timestamps(now - Duration::days(10), now - Duration::days(1))
            .with_notes(
                "Wild Rift rank boost from Diamond IV to Master. High difficulty, high priority.",
                "Account has been stuck in Diamond for months. Looking for a skilled player to push it to Master rank.",
            )
            .with_requirements([
                "Guarantees to reach Master rank",
                "Must play on mobile, not emulator",
                "Maintain at least 55% win rate",
                "Complete within two weeks maximum",
            ]),
        ];

        let mut activities = HashMap::new();
        activities.insert("1".to_string(), Self::order_history("1"));

        Self {
            orders,
            activities,
            testimonials: Self::testimonials(),
        }
    }
}

impl FakeDataset {
    /// 데이터셋을 JSON 파일로 저장
    pub fn save_to_file(&self, path: &str) -> BoardResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// JSON 파일에서 데이터셋 로드
    pub fn load_from_file(path: &str) -> BoardResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let dataset: FakeDataset = serde_json::from_str(&json)?;
        Ok(dataset)
    }

    /// 주문의 활동 기록 (없으면 빈 목록)
    pub fn activities_for(&self, order_id: &str) -> &[Activity] {
        self.activities.get(order_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 진행 중인 주문 하나의 전형적인 이력
    fn order_history(order_id: &str) -> Vec<Activity> {
        let now = Utc::now();
        let admin = Actor::new("admin1", "Admin", "https://i.pravatar.cc/150?u=admin1", ActorRole::Admin);
        let client = Actor::new("client1", "JohnDoe", "https://i.pravatar.cc/150?u=client1", ActorRole::Client);
        let booster = Actor::new("booster1", "RankHero", "https://i.pravatar.cc/150?u=booster1", ActorRole::Booster);
        let two_days_ago = now - Duration::days(2);
        let one_day_ago = now - Duration::days(1);

        let status = |from: &str, to: &str| ActivityEvent::StatusChange {
            from: from.to_string(),
            to: to.to_string(),
        };
        let chat = |message: &str| ActivityEvent::ChatMessage {
            message: message.to_string(),
        };

        vec![
            Activity::new(order_id, two_days_ago, admin.clone(), status("pending", "in_progress")),
            Activity::new(
                order_id,
                two_days_ago + Duration::hours(1),
                admin,
                ActivityEvent::BoosterChange {
                    from: "Unassigned".to_string(),
                    to: "RankHero".to_string(),
                },
            ),
            Activity::new(
                order_id,
                two_days_ago + Duration::hours(2),
                client.clone(),
                chat("Hello, when will you start working on my order?"),
            ),
            Activity::new(
                order_id,
                two_days_ago + Duration::minutes(150),
                booster.clone(),
                chat("I will start today. What champions do you prefer?"),
            ),
            Activity::new(
                order_id,
                one_day_ago,
                booster.clone(),
                ActivityEvent::ProgressUpdate { previous: 0, new: 15 },
            ),
            Activity::new(
                order_id,
                one_day_ago + Duration::hours(12),
                booster.clone(),
                ActivityEvent::ProgressUpdate { previous: 15, new: 30 },
            ),
            Activity::new(order_id, now - Duration::hours(12), booster.clone(), status("in_progress", "paused")),
            Activity::new(
                order_id,
                now - Duration::hours(11),
                booster.clone(),
                ActivityEvent::NoteAdded {
                    note: "Taking a break due to server maintenance. Will resume in 8 hours.".to_string(),
                },
            ),
            Activity::new(order_id, now - Duration::hours(4), booster.clone(), status("paused", "in_progress")),
            Activity::new(
                order_id,
                now - Duration::hours(2),
                booster,
                ActivityEvent::ProgressUpdate { previous: 30, new: 45 },
            ),
            Activity::new(order_id, now - Duration::minutes(30), client, chat("How much longer until we reach Gold?")),
        ]
    }

    /// 홈 화면 후기 15개
    fn testimonials() -> Vec<Testimonial> {
        let entry = |id: u32, name: &str, service: &str, region: &str, ranks: Option<(&str, &str)>, text: &str, rating: u8| {
            Testimonial {
                id,
                name: name.to_string(),
                service: service.to_string(),
                text: text.to_string(),
                rating,
                region: Some(region.to_string()),
                from_rank: ranks.map(|(from, _)| from.to_string()),
                to_rank: ranks.map(|(_, to)| to.to_string()),
            }
        };

        vec![
            entry(1, "James K.", "Diamond Boost", "EUW", Some(("Platinum II", "Diamond IV")),
                "Never thought I'd escape Platinum until I tried this service. My booster Xian completed the job in under 72 hours, playing mostly at night to avoid detection. Worth every penny!", 5),
            entry(2, "Sarah M.", "Duo Queue Boost", "NA", Some(("Silver IV", "Platinum III")),
                "Six months stuck in Silver had me ready to uninstall LoL for good. Two weeks of duo sessions later and I'm in Platinum! My booster taught me that I was playing too passively as a jungler - now I control the map!", 5),
            entry(3, "Michael T.", "Account Purchase", "EUNE", None,
                "Skeptical at first about buying an account, but the risk was worth it. Login details arrived within an hour of payment. The account came with 87 skins including 3 ultimates that would have cost me a fortune!", 5),
            entry(4, "Emma J.", "Coaching Sessions", "NA", Some(("Gold III", "Platinum II")),
                "As a mid main struggling with roaming timing, my coach completely transformed my gameplay. After 5 sessions reviewing my replays, he identified exactly where I was wasting opportunities. Not cheap, but changed my entire approach to the game.", 4),
            entry(5, "Alex P.", "Placement Matches", "EUW", None,
                "7-3 in placements put me straight into Gold II! Last season I went 5-5 and landed in Bronze. The difference is night and day. Booster even dodged a game where our comp was terrible - that attention to detail impressed me.", 5),
            entry(6, "David L.", "Champion Mastery", "NA", None,
                "M7 Yasuo, M7 Zed, and M7 Lee Sin in ONE WEEKEND? My friends can't believe I suddenly 'got good' with mechanically intensive champions. The booster even added me on discord to share some combos afterward.", 5),
            entry(7, "Lisa R.", "Rank Boost", "KR", Some(("Gold I", "Diamond V")),
                "한국 서버에서 다이아까지 올려준 부스터에게 정말 감사합니다. 2주 안에 완료했고 제 계정을 아주 안전하게 관리해주었어요. 특히 MMR 안정화를 위해 추가 게임도 진행해 주셨습니다.", 5),
            entry(8, "Robert K.", "Clash Boost", "NA", None,
                "Our 4-man premade needed a carry for weekend Clash. The booster we hired absolutely DOMINATED as Irelia top - 12/2/8, 15/1/6, and 8/0/11 in the finals! Trophy secured and he was cool to play with.", 5),
            entry(9, "Jessica T.", "Account Leveling", "LAN", None,
                "Ordered a level 30 account with specific champions for my boyfriend's birthday. Not only was it ready in 4 days, but they added extra BE as a courtesy so he could buy a few more champs. Best gift ever!", 5),
            entry(10, "Thomas B.", "Duo Queue", "OCE", Some(("Bronze III", "Silver I")),
                "B3→S1 ✓\nMade new friend ✓\nLearned Thresh hooks ✓\nStopped dying to ganks ✓\nTook notes during every session ✓\nFinally enjoying support role ✓", 5),
            entry(11, "Maria C.", "Normal Games", "BR", None,
                "Evento K/DA precisava de 2000 tokens. Sem tempo para jogar, contratei 25 jogos normais. Booster terminou com 85% de vitórias, ganhei todos os tokens necessários para a skin Prestige. Muito profissional!", 5),
            entry(12, "Kevin W.", "TFT Boosting", "NA", Some(("Gold IV", "Diamond IV")),
                "TFT boost delivered in 32 games with 75% top 4 rate. As a bonus, booster sent me a spreadsheet with 6 different meta comps and itemization strategies. I've been able to maintain my rank since!", 5),
            entry(13, "Natalie S.", "Flex Queue Boost", "EUW", Some(("Silver II", "Gold I")),
                "Season rewards secured with just 3 days before season end! The booster only played my main champions (Lux/Seraphine) to keep my match history looking authentic. Customer service was responsive at every step.", 5),
            entry(14, "Christopher M.", "Specific Champion Boost", "NA", None,
                "Needed better stats on Yasuo after weeks of trolling... 63% winrate over 30 games from my booster fixed my profile! No more team bans when I hover Yasuo, and I got FOUR S grades for chest farming. Literally solved my biggest LoL problem.", 5),
            entry(15, "Oliver P.", "Account Purchase", "EUW", None,
                "Unbox level: 1000\nSkins: 273 (all limited events since 2014)\nBlue Essence: 154,000\nGems: 23\nPermanent ward skins: 37\nHonor level: 5\n\nSafe transaction. Account delivered in 10 minutes. No red flags after two months of use.", 5),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_shape() {
        let dataset = FakeDataset::default();
        assert_eq!(dataset.orders.len(), 5);
        assert_eq!(dataset.testimonials.len(), 15);
        assert_eq!(dataset.activities_for("1").len(), 11);
        assert!(dataset.activities_for("2").is_empty());

        let ids: Vec<&str> = dataset.orders.iter().map(|order| order.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(dataset.testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("boostboard-dataset-{}.json", uuid::Uuid::new_v4()));
        let path = path.to_string_lossy().to_string();

        let dataset = FakeDataset::default();
        dataset.save_to_file(&path).unwrap();
        let loaded = FakeDataset::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.orders, dataset.orders);
        assert_eq!(loaded.testimonials, dataset.testimonials);
        assert_eq!(loaded.activities_for("1"), dataset.activities_for("1"));
    }
}
