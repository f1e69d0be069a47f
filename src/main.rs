use std::time::Duration;

use anyhow::Context;
use log::{info, warn};

use boostboard::activity::{ActivityFilter, ActivityKind, ActivityLog};
use boostboard::carousel::{Carousel, CarouselTiming};
use boostboard::data::{DataLoader, DataProvider, FakeDataset, MockDataProvider};
use boostboard::random::StdRandom;
use boostboard::roster::{
    IntentOutcome, MonitorConfig, OrderAction, OrderDetailView, OrderIntent, OrderStatus, RosterMonitor,
    StatusFilter,
};
use boostboard::BoardConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BoardConfig::from_env().context("설정 로드 실패")?;
    info!("boostboard 데모 시작: {:?}", config);

    let dataset = match &config.dataset_path {
        Some(path) => DataLoader::load_dataset(path).with_context(|| format!("데이터셋 로드 실패: {}", path))?,
        None => FakeDataset::default(),
    };
    let provider = MockDataProvider::new(dataset);

    let orders = provider.list_orders().await?;
    let mut monitor = RosterMonitor::start(orders, MonitorConfig::from(&config), Box::new(StdRandom::new()));

    run_scenarios(&provider, &monitor).await?;

    let testimonials = provider.list_testimonials().await?;
    let mut carousel = Carousel::mount(testimonials, CarouselTiming::from(&config), config.viewport_width);

    info!("\n===== 실시간 구간 ({}초) =====", config.demo_seconds);
    let half = Duration::from_secs(config.demo_seconds) / 2;
    tokio::time::sleep(half).await;

    // 포인터가 올라간 동안은 넘기지 않음
    carousel.pointer_enter().await;
    let paused_at = carousel.snapshot().await.active_index;
    tokio::time::sleep(Duration::from_millis(config.carousel_interval_ms)).await;
    info!(
        "일시정지 확인: {} -> {}",
        paused_at,
        carousel.snapshot().await.active_index
    );
    carousel.pointer_leave().await;
    tokio::time::sleep(half).await;

    let snapshot = carousel.snapshot().await;
    let names: Vec<&str> = snapshot.visible.iter().map(|t| t.name.as_str()).collect();
    info!(
        "캐러셀: 페이지 {}/{} 표시 {:?}",
        snapshot.active_page + 1,
        snapshot.page_count,
        names
    );

    for change in monitor.presence_log().await {
        info!(
            "접속 상태 변경: 주문 {} 부스터 {} {} -> {}",
            change.order_id, change.booster_id, change.previous, change.current
        );
    }

    monitor.shutdown();
    carousel.unmount().await;
    info!("데모 종료");

    Ok(())
}

/// 로스터/상세 화면/활동 기록 시나리오
async fn run_scenarios(provider: &MockDataProvider, monitor: &RosterMonitor) -> anyhow::Result<()> {
    info!("\n===== 시나리오 시작 =====\n");

    // 시나리오 1: 필터
    monitor.set_search_query("ORD-56").await;
    log_visible(monitor, "검색 'ORD-56'").await;

    monitor.set_search_query("").await;
    monitor.set_status_filter(StatusFilter::Only(OrderStatus::Completed)).await;
    monitor.set_chat_filter(Some(true)).await;
    log_visible(monitor, "완료 + 채팅 있음").await;

    monitor.set_status_filter(StatusFilter::All).await;
    monitor.set_chat_filter(None).await;
    log_visible(monitor, "필터 해제").await;

    // 시나리오 2: 상세 화면에서 작업 시작
    let mut detail = OrderDetailView::new();
    if let Some(order) = monitor.order("2").await {
        detail.open(order);
        info!("상세 화면 작업: {:?}", detail.available_actions());

        if let Some(intent) = detail.trigger(OrderAction::Start) {
            dispatch(provider, monitor, &intent).await?;
        }
        detail.sync(monitor.order("2").await);
        info!("상세 화면 작업 (시작 후): {:?}", detail.available_actions());

        detail.begin_progress_edit();
        detail.set_progress_draft(20);
        detail.commit_progress();
        detail.close();
    }

    // 시나리오 3: 두 단계 삭제
    if let Some(order) = monitor.order("5").await {
        detail.open(order);
        if detail.trigger(OrderAction::Delete).is_none() {
            info!("삭제 확인 대기: {}", detail.is_confirming_delete());
        }
        if let Some(intent) = detail.trigger(OrderAction::Delete) {
            dispatch(provider, monitor, &intent).await?;
        }
        detail.sync(monitor.order("5").await);
        info!("삭제 후 상세 화면 표시: {}", detail.is_visible());
    }

    // 시나리오 4: 채팅 이동
    if let Some(order) = monitor.order("1").await {
        detail.open(order);
        if let Some(intent) = detail.trigger(OrderAction::OpenChat) {
            dispatch(provider, monitor, &intent).await?;
        }
        detail.close();
    }

    // 시나리오 5: 활동 기록
    let log = ActivityLog::from_entries("1", provider.list_activities("1").await?);
    info!("주문 1 활동 기록 {}건", log.len());
    for activity in log.filtered(ActivityFilter::Only(ActivityKind::ChatMessage)) {
        info!("  [{}] {}: {}", activity.timestamp.format("%m-%d %H:%M"), activity.actor.name, activity.event.describe());
    }

    info!("상태별 주문 수: {:?}", monitor.status_counts().await);
    info!("\n===== 시나리오 완료 =====\n");
    Ok(())
}

/// 상세 화면 의도를 로스터와 데이터 제공자에 반영
async fn dispatch(provider: &MockDataProvider, monitor: &RosterMonitor, intent: &OrderIntent) -> anyhow::Result<()> {
    match monitor.apply_intent(intent).await {
        IntentOutcome::Applied => match intent {
            OrderIntent::ChangeStatus { order_id, status } => {
                provider.update_order_status(order_id, *status).await?;
            }
            OrderIntent::Delete { order_id } => {
                provider.delete_order(order_id).await?;
            }
            OrderIntent::NavigateToChat { .. } => {}
        },
        IntentOutcome::Navigate(route) => info!("채팅 화면으로 이동: {}", route),
        IntentOutcome::Ignored => warn!("처리되지 않은 의도: {:?}", intent),
    }
    Ok(())
}

async fn log_visible(monitor: &RosterMonitor, label: &str) {
    let codes: Vec<String> = monitor
        .visible_orders()
        .await
        .into_iter()
        .map(|order| order.order_code)
        .collect();
    info!("{}: {:?}", label, codes);
}
