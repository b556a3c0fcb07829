//! Menu resolution over the menu document.
//!
//! Daily overrides are keyed by `YYYY-MM-DD`; the weekly template lives
//! beside them under the reserved `__weekly__` key and is indexed by day of
//! week (0 = Sunday). Precedence is strict: an override always wins when
//! present, regardless of the weekly entry's content.
//!
//! Failures propagate; absence of a menu is `Ok(None)`. Callers that prefer
//! the degrade-to-empty behavior (a remote outage shown as "no menu
//! configured") apply `unwrap_or_default()` themselves.

use std::sync::Arc;

use mensa_core::menu::{weekday_index, DayMenu, MenuDocument, WeeklyTemplate};
use mensa_core::store::{DocumentStore, Result};

/// Menu overrides and weekly template over the menu document.
pub struct MenuService<S> {
    store: Arc<S>,
}

impl<S> MenuService<S>
where
    S: DocumentStore<MenuDocument>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The whole menu document.
    pub async fn get_all(&self) -> Result<MenuDocument> {
        self.store.read().await
    }

    /// The override for a date, if any. Does not consult the template.
    pub async fn get_for_date(&self, date_key: &str) -> Result<Option<DayMenu>> {
        let document = self.store.read().await?;
        Ok(document.overrides.get(date_key).cloned())
    }

    /// The menu to display for a date: override first, then the weekly
    /// template entry for that weekday, then absent.
    pub async fn get_for_date_with_fallback(&self, date_key: &str) -> Result<Option<DayMenu>> {
        let document = self.store.read().await?;
        if let Some(menu) = document.overrides.get(date_key) {
            return Ok(Some(menu.clone()));
        }
        let Some(day) = weekday_index(date_key) else {
            return Ok(None);
        };
        Ok(document
            .weekly
            .as_ref()
            .and_then(|weekly| weekly.get(&day).cloned()))
    }

    /// Sets the override for a date.
    pub async fn save_for_date(&self, date_key: &str, menu: DayMenu) -> Result<()> {
        let mut document = self.store.read().await?;
        document.overrides.insert(date_key.to_string(), menu);
        self.store.write(&document).await?;
        tracing::debug!(date_key, "Menu override saved");
        Ok(())
    }

    /// Removes the override for a date. Clearing an absent key is a no-op.
    pub async fn clear_override(&self, date_key: &str) -> Result<()> {
        let mut document = self.store.read().await?;
        document.overrides.remove(date_key);
        self.store.write(&document).await?;
        tracing::debug!(date_key, "Menu override cleared");
        Ok(())
    }

    /// The weekly template, empty when none is stored.
    pub async fn get_weekly_template(&self) -> Result<WeeklyTemplate> {
        let document = self.store.read().await?;
        Ok(document.weekly.unwrap_or_default())
    }

    /// Replaces the weekly template as a whole. There is no per-day update.
    pub async fn save_weekly_template(&self, template: WeeklyTemplate) -> Result<()> {
        let mut document = self.store.read().await?;
        document.weekly = Some(template);
        self.store.write(&document).await?;
        tracing::debug!("Weekly template replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::RwLock;

    use mensa_core::store::Result as StoreResult;

    struct InMemoryMenuStore {
        document: RwLock<MenuDocument>,
    }

    impl InMemoryMenuStore {
        fn new(document: MenuDocument) -> Self {
            Self {
                document: RwLock::new(document),
            }
        }

        fn empty() -> Self {
            Self::new(MenuDocument::default())
        }
    }

    #[async_trait]
    impl DocumentStore<MenuDocument> for InMemoryMenuStore {
        async fn read(&self) -> StoreResult<MenuDocument> {
            Ok(self.document.read().await.clone())
        }

        async fn write(&self, document: &MenuDocument) -> StoreResult<()> {
            *self.document.write().await = document.clone();
            Ok(())
        }
    }

    // 2025-06-15 is a Sunday (weekday index 0).
    const SUNDAY: &str = "2025-06-15";

    fn document_with_weekly_sunday(menu: DayMenu) -> MenuDocument {
        let mut weekly = WeeklyTemplate::new();
        weekly.insert(0, menu);
        MenuDocument {
            weekly: Some(weekly),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_for_date_ignores_weekly_template() {
        let document = document_with_weekly_sunday(json!({ "lunch": "Falafel" }));
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::new(document)));

        let menu = menus.get_for_date(SUNDAY).await.unwrap();
        assert!(menu.is_none());
    }

    #[tokio::test]
    async fn test_fallback_uses_weekly_when_override_absent() {
        let document = document_with_weekly_sunday(json!({ "lunch": "Falafel" }));
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::new(document)));

        let menu = menus.get_for_date_with_fallback(SUNDAY).await.unwrap();
        assert_eq!(menu, Some(json!({ "lunch": "Falafel" })));
    }

    #[tokio::test]
    async fn test_fallback_absent_when_neither_exists() {
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::empty()));

        let menu = menus.get_for_date_with_fallback(SUNDAY).await.unwrap();
        assert!(menu.is_none());
    }

    #[tokio::test]
    async fn test_override_wins_over_weekly() {
        let mut document = document_with_weekly_sunday(json!({ "lunch": "Falafel" }));
        document
            .overrides
            .insert(SUNDAY.to_string(), json!({ "lunch": "Kabsa" }));
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::new(document)));

        let menu = menus.get_for_date_with_fallback(SUNDAY).await.unwrap();
        assert_eq!(menu, Some(json!({ "lunch": "Kabsa" })));
    }

    #[tokio::test]
    async fn test_invalid_date_key_resolves_to_absent() {
        let document = document_with_weekly_sunday(json!({ "lunch": "Falafel" }));
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::new(document)));

        let menu = menus.get_for_date_with_fallback("garbage").await.unwrap();
        assert!(menu.is_none());
    }

    #[tokio::test]
    async fn test_save_and_clear_override() {
        let store = Arc::new(InMemoryMenuStore::empty());
        let menus = MenuService::new(store.clone());

        menus
            .save_for_date(SUNDAY, json!({ "lunch": "Mandi" }))
            .await
            .unwrap();
        assert_eq!(
            menus.get_for_date(SUNDAY).await.unwrap(),
            Some(json!({ "lunch": "Mandi" }))
        );

        menus.clear_override(SUNDAY).await.unwrap();
        assert!(menus.get_for_date(SUNDAY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_absent_override_is_a_no_op() {
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::empty()));
        menus.clear_override(SUNDAY).await.unwrap();
    }

    #[tokio::test]
    async fn test_weekly_template_replaced_as_a_whole() {
        let document = document_with_weekly_sunday(json!({ "lunch": "Falafel" }));
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::new(document)));

        let mut replacement = WeeklyTemplate::new();
        replacement.insert(1, json!({ "lunch": "Shawarma" }));
        menus.save_weekly_template(replacement.clone()).await.unwrap();

        // The old Sunday entry is gone; the template was not merged per-day.
        let stored = menus.get_weekly_template().await.unwrap();
        assert_eq!(stored, replacement);
    }

    #[tokio::test]
    async fn test_missing_weekly_template_reads_empty() {
        let menus = MenuService::new(Arc::new(InMemoryMenuStore::empty()));
        let template = menus.get_weekly_template().await.unwrap();
        assert!(template.is_empty());
    }

    #[tokio::test]
    async fn test_saving_override_keeps_weekly_slot() {
        let document = document_with_weekly_sunday(json!({ "lunch": "Falafel" }));
        let store = Arc::new(InMemoryMenuStore::new(document));
        let menus = MenuService::new(store);

        menus
            .save_for_date("2025-06-16", json!({ "lunch": "Mandi" }))
            .await
            .unwrap();

        let template = menus.get_weekly_template().await.unwrap();
        assert_eq!(template.get(&0), Some(&json!({ "lunch": "Falafel" })));
    }
}
