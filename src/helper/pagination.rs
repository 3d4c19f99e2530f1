//! Builds a [`PaginationState`] from request values, remembering them per user.

use std::sync::Arc;

use crate::config::settings::PaginationSettings;
use crate::error::{AppError, AppResult};
use crate::helper::PaginationRequest;
use crate::pagination::{MIN_RANGE_SIZE, PaginationState};
use crate::registry::{Registry, RegistryValue};

pub const PAGE_INDEX_NAME: &str = "pageindex";
pub const PAGE_SIZE_NAME: &str = "pagesize";
pub const RANGE_SIZE_NAME: &str = "rangesize";
pub const SORT_NAME: &str = "sort";

pub struct PaginationHelper {
    settings: PaginationSettings,
    registry: Option<Arc<dyn Registry>>,
}

impl PaginationHelper {
    pub fn new(settings: &PaginationSettings, registry: Option<Arc<dyn Registry>>) -> Self {
        Self {
            settings: settings.clone(),
            registry,
        }
    }

    pub fn settings(&self) -> &PaginationSettings {
        &self.settings
    }

    /// The registry, unless auto registration is switched off.
    fn active_registry(&self) -> Option<&dyn Registry> {
        if !self.settings.globals.auto_register {
            return None;
        }
        self.registry.as_deref()
    }

    /// Write `value` when present, otherwise read the last stored one.
    fn remember_integer(&self, user_id: &str, key: &str, name: &str, value: Option<i64>) -> AppResult<Option<i64>> {
        let Some(registry) = self.active_registry() else {
            return Ok(value);
        };

        match value {
            Some(value) => {
                registry
                    .write(user_id, key, name, RegistryValue::Integer(value))
                    .map_err(|err| registry_error(key, name, err))?;
                Ok(Some(value))
            }
            None => {
                let stored = registry
                    .read(user_id, key, name)
                    .map_err(|err| registry_error(key, name, err))?;
                Ok(stored.as_ref().and_then(RegistryValue::as_integer))
            }
        }
    }

    /// Page index, page size and range size for the listing `key`.
    ///
    /// A search resets the page to the first one. Stored values fill in what
    /// the request leaves out; the result is then corrected: negative pages
    /// become 0, missing or non-positive page sizes take the default, a
    /// missing or zero range takes the default and any other range below the
    /// minimum is raised to it.
    pub fn state_from_request(&self, request: &PaginationRequest, user_id: &str, key: &str) -> AppResult<PaginationState> {
        let page = if request.search_executed { Some(0) } else { request.page };

        let page = self.remember_integer(user_id, key, PAGE_INDEX_NAME, page)?;
        let page_size = self.remember_integer(user_id, key, PAGE_SIZE_NAME, request.pagesize)?;
        let range_size = self.remember_integer(user_id, key, RANGE_SIZE_NAME, request.rangesize)?;

        let defaults = &self.settings.defaults;

        let page_index = page.map_or(0, |page| clamp_to_u32(page.max(0)));
        let page_size = match page_size {
            Some(size) if size > 0 => clamp_to_u32(size),
            _ => defaults.page_size,
        };
        let range_size = match range_size {
            None | Some(0) => defaults.range_size,
            Some(range) if range < i64::from(MIN_RANGE_SIZE) => MIN_RANGE_SIZE,
            Some(range) => clamp_to_u32(range),
        };

        tracing::debug!(user_id, key, page_index, page_size, range_size, "pagination state from request");

        let mut state = PaginationState::new();
        state
            .set_page_sizes(defaults.page_sizes.clone())
            .set_page_index(page_index)
            .set_page_size(page_size)
            .set_range_size(range_size);
        Ok(state)
    }

    /// Replace the state's sort from the request, or from the stored sort.
    ///
    /// Without a registry the state keeps its sort when the request has none.
    pub fn update_sort_from_request(
        &self,
        request: &PaginationRequest,
        user_id: &str,
        key: &str,
        state: &mut PaginationState,
    ) -> AppResult<()> {
        let sort = match (request.effective_sort(), self.active_registry()) {
            (Some(sort), Some(registry)) => {
                registry
                    .write(user_id, key, SORT_NAME, RegistryValue::Text(sort.to_string()))
                    .map_err(|err| registry_error(key, SORT_NAME, err))?;
                sort.to_string()
            }
            (Some(sort), None) => sort.to_string(),
            (None, Some(registry)) => {
                let stored = registry
                    .read(user_id, key, SORT_NAME)
                    .map_err(|err| registry_error(key, SORT_NAME, err))?;
                stored
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| state.sort_as_string())
            }
            (None, None) => state.sort_as_string(),
        };

        tracing::debug!(user_id, key, sort = %sort, "pagination sort from request");
        state.set_sort_from_string(&sort);
        Ok(())
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Keep registry failures tagged with the value they concern.
fn registry_error(key: &str, name: &str, err: AppError) -> AppError {
    match err {
        AppError::Registry { .. } => err,
        other => AppError::Registry {
            key: format!("{key}/{name}"),
            source: anyhow::Error::new(other),
        },
    }
}
