use crate::domain::a001_csv_chat::session::{Notice, NoticeLevel};
use std::collections::VecDeque;
use leptos::prelude::*;
use thaw::*;

/// Очередь уведомлений: каждое показывается по очереди, как `alert`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        self.items.push_back(notice);
    }

    /// Текущее (показываемое) уведомление
    pub fn current(&self) -> Option<&Notice> {
        self.items.front()
    }

    /// Закрыть текущее; возвращает true, если есть следующее
    pub fn dismiss(&mut self) -> bool {
        self.items.pop_front();
        !self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Сервис для блокирующих уведомлений (замена `window.alert`)
#[derive(Clone, Copy)]
pub struct NotificationService {
    open: RwSignal<bool>,
    queue: RwSignal<NoticeQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    /// Поставить уведомление в очередь; открытое не заменяется
    pub fn show(&self, notice: Notice) {
        let was_open = self.open.get_untracked();
        self.queue.update(|q| {
            // Диалог закрыли кликом по фону: в очереди остались уже виденные
            if !was_open {
                q.clear();
            }
            q.push(notice);
        });
        self.open.set(true);
    }

    pub fn hide(&self) {
        let mut has_next = false;
        self.queue.update(|q| has_next = q.dismiss());
        self.open.set(has_next);
    }
}

/// Диалог уведомления. Рендерится один раз в корне приложения.
#[component]
pub fn NotificationDialog() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let current = move || service.queue.with(|q| q.current().cloned());
    let is_error = move || current().is_some_and(|n| n.level == NoticeLevel::Error);
    let title = move || if is_error() { "Error" } else { "Done" };
    let text = move || current().map(|n| n.text).unwrap_or_default();
    let text_class = move || {
        if is_error() {
            "notice-text notice-text--error"
        } else {
            "notice-text"
        }
    };

    view! {
        <Dialog open=service.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <div class=text_class>
                            {text}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| service.hide()
                        >
                            "OK"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_every_notice_in_order() {
        let mut queue = NoticeQueue::default();
        queue.push(Notice::success("CSV uploaded"));
        queue.push(Notice::error("Error: timeout"));

        assert_eq!(queue.current(), Some(&Notice::success("CSV uploaded")));
        assert!(queue.dismiss());
        assert_eq!(queue.current(), Some(&Notice::error("Error: timeout")));
        assert!(!queue.dismiss());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_on_empty_queue() {
        let mut queue = NoticeQueue::default();
        assert!(!queue.dismiss());
        assert_eq!(queue.current(), None);
        assert_eq!(queue.len(), 0);
    }
}
