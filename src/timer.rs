//! 예약 작업 핸들
//!
//! 주기 타이머와 지연 타이머를 tokio 태스크로 실행하고, 핸들을 소유한
//! 쪽이 해제되거나 `cancel`을 호출하면 태스크를 중단합니다.
//! 핸들이 살아 있는 동안에만 콜백이 실행됩니다.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

/// 주기 콜백의 다음 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    /// 다음 주기에도 계속 실행
    Continue,
    /// 타이머 종료
    Stop,
}

/// 취소 가능한 예약 작업
///
/// 드롭 시 내부 태스크를 `abort` 합니다.
#[derive(Debug)]
pub struct ScheduledTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// 주기 작업 등록
    ///
    /// 첫 실행은 등록 시점에서 한 주기가 지난 뒤입니다. tokio 런타임 안에서
    /// 호출해야 합니다.
    pub fn every<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = TickControl> + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tick().await == TickControl::Stop {
                    debug!("주기 작업 자체 종료: {}", name);
                    break;
                }
            }
        });

        debug!("주기 작업 등록: {} ({}ms)", name, period.as_millis());
        Self { name, handle }
    }

    /// 지연 작업 등록 (한 번 실행)
    pub fn after<Fut>(name: &'static str, delay: Duration, job: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            job.await;
        });

        Self { name, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 태스크가 끝났는지 여부
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// 명시적 취소
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("예약 작업 취소: {}", self.name);
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(period: Duration) -> (ScheduledTask, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let task = ScheduledTask::every("test-ticker", period, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                TickControl::Continue
            }
        });
        (task, count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (_task, count) = counting_task(Duration::from_secs(5));

        sleep(Duration::from_millis(4_999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (task, count) = counting_task(Duration::from_secs(1));

        sleep(Duration::from_millis(2_500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        task.cancel();
        sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_control_ends_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let task = ScheduledTask::every("stop-after-two", Duration::from_secs(1), move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) + 1 >= 2 {
                    TickControl::Stop
                } else {
                    TickControl::Continue
                }
            }
        });

        sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_job_runs_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let task = ScheduledTask::after("settle", Duration::from_millis(500), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(499)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_delayed_job_never_runs() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let task = ScheduledTask::after("settle", Duration::from_millis(500), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(task);

        sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
