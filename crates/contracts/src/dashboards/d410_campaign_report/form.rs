//! Filter form state: selection, reference options, dirty tracking and
//! validation. Pure state machine; the UI keeps one instance in a signal.

use super::dto::{Campaign, EntityId, Platform, Selectable};
use super::selection::{
    contains_sentinel, merge_selection, toggle_option, with_sentinel, without_sentinel,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    #[serde(rename = "dateRange")]
    DateRange,
    #[serde(rename = "live")]
    Live,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::DateRange => "dateRange",
            FilterMode::Live => "live",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::DateRange => "Date Range",
            FilterMode::Live => "Live Data",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dateRange" => Some(FilterMode::DateRange),
            "live" => Some(FilterMode::Live),
            _ => None,
        }
    }

    pub fn all() -> [FilterMode; 2] {
        [FilterMode::DateRange, FilterMode::Live]
    }
}

/// Period in local calendar dates; either end may be unset while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// First day of the month of `today` .. `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self::new(first, today)
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }
}

/// Everything the user has chosen in the filter form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub platform: Option<Platform>,
    pub campaigns: Vec<Campaign>,
    pub mode: FilterMode,
    pub date_range: DateRange,
}

impl FilterSelection {
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            platform: Some(Platform::sentinel()),
            campaigns: vec![Campaign::sentinel()],
            mode: FilterMode::DateRange,
            date_range: DateRange::month_to_date(today),
        }
    }

    pub fn platform_name(&self) -> Option<&str> {
        self.platform.as_ref().map(|p| p.name.as_str())
    }

    /// Selected campaigns without the "All" entry
    pub fn concrete_campaigns(&self) -> Vec<Campaign> {
        without_sentinel(&self.campaigns)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    Platform,
    Campaigns,
    Mode,
    DateRange,
}

pub type FieldErrors = BTreeMap<FormField, String>;

/// Form state. Options are what the pickers offer, `selection` is what
/// is chosen, `dirty` records fields changed away from their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub selection: FilterSelection,
    pub platform_options: Vec<Platform>,
    pub campaign_options: Vec<Campaign>,
    reference_platforms: Vec<Platform>,
    defaults: FilterSelection,
    dirty: BTreeSet<FormField>,
}

impl FilterForm {
    pub fn new(today: NaiveDate) -> Self {
        let selection = FilterSelection::initial(today);
        Self {
            defaults: selection.clone(),
            selection,
            platform_options: vec![Platform::sentinel()],
            campaign_options: vec![Campaign::sentinel()],
            reference_platforms: Vec::new(),
            dirty: BTreeSet::new(),
        }
    }

    // ------------------------------------------------------------------
    // Reference data
    // ------------------------------------------------------------------

    /// Platform list arrived from the API
    pub fn set_platform_list(&mut self, platforms: Vec<Platform>) {
        self.reference_platforms = without_sentinel(&platforms);
        self.rebuild_platform_options();
        self.dirty.insert(FormField::Platform);
    }

    /// Campaign list for the selected platform arrived. A concrete platform
    /// gets every campaign selected; under "All" the selection stays `[All]`.
    pub fn set_campaign_list(&mut self, campaigns: Vec<Campaign>) {
        self.campaign_options = with_sentinel(&campaigns);
        self.selection.campaigns = if self.is_all_platform() {
            vec![Campaign::sentinel()]
        } else {
            self.campaign_options.clone()
        };
        self.dirty.insert(FormField::Campaigns);
    }

    /// Platform id to load campaigns for; None when no platform is chosen
    pub fn campaign_list_key(&self) -> Option<EntityId> {
        self.selection.platform.as_ref().map(|p| p.id.clone())
    }

    pub fn reference_platforms(&self) -> &[Platform] {
        &self.reference_platforms
    }

    // ------------------------------------------------------------------
    // User edits
    // ------------------------------------------------------------------

    /// Returns true when the selected platform id actually changed.
    ///
    /// A new platform starts from `[All]` until its campaign list arrives,
    /// so campaigns of the previous platform are never submitted with it.
    pub fn select_platform(&mut self, platform: Option<Platform>) -> bool {
        let previous_id = self.selection.platform.as_ref().map(|p| p.id.clone());
        let changed = previous_id.as_ref() != platform.as_ref().map(|p| &p.id);

        if changed {
            self.campaign_options = vec![Campaign::sentinel()];
        }
        if changed || platform.as_ref().is_some_and(|p| p.is_all()) {
            self.selection.campaigns = vec![Campaign::sentinel()];
            self.dirty.insert(FormField::Campaigns);
        }

        self.selection.platform = platform;
        self.dirty.insert(FormField::Platform);
        changed
    }

    /// Select a platform by its id string as it comes from a `<select>`
    pub fn select_platform_by_id(&mut self, id: &str) -> bool {
        let platform = self
            .platform_options
            .iter()
            .find(|p| p.id.as_string() == id)
            .cloned();
        self.select_platform(platform)
    }

    /// New multi-select value for campaigns
    pub fn change_campaigns(&mut self, next: Vec<Campaign>) {
        self.selection.campaigns =
            merge_selection(&self.selection.campaigns, next, &self.campaign_options);
        self.dirty.insert(FormField::Campaigns);
    }

    /// Single click on a campaign option
    pub fn toggle_campaign(&mut self, option: &Campaign) {
        self.selection.campaigns = if option.is_all() && self.campaign_options.len() == 1 {
            // Nothing but "All" on offer: a plain on/off switch
            if contains_sentinel(&self.selection.campaigns) {
                Vec::new()
            } else {
                vec![Campaign::sentinel()]
            }
        } else {
            toggle_option(&self.selection.campaigns, option, &self.campaign_options)
        };
        self.dirty.insert(FormField::Campaigns);
    }

    /// Returns true when the switch also changed the selected platform
    pub fn set_mode(&mut self, mode: FilterMode) -> bool {
        self.selection.mode = mode;
        self.dirty.insert(FormField::Mode);
        self.rebuild_platform_options();

        if mode == FilterMode::Live {
            self.selection.date_range = self.defaults.date_range;
            if self.is_all_platform() {
                let first = self.reference_platforms.first().cloned();
                return self.select_platform(first);
            }
        }
        false
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.selection.date_range = range;
        self.dirty.insert(FormField::DateRange);
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    pub fn validate(&self) -> FieldErrors {
        validate_selection(&self.selection)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_field_dirty(&self, field: FormField) -> bool {
        self.dirty.contains(&field)
    }

    /// Submit is allowed once something changed, the form is valid and
    /// no request is in flight
    pub fn can_submit(&self, pending: bool) -> bool {
        self.is_dirty() && self.is_valid() && !pending
    }

    /// Campaign picker is usable only with a platform chosen
    pub fn campaigns_enabled(&self) -> bool {
        self.selection.platform.is_some()
    }

    fn is_all_platform(&self) -> bool {
        self.selection.platform.as_ref().is_some_and(|p| p.is_all())
    }

    fn rebuild_platform_options(&mut self) {
        self.platform_options = match self.selection.mode {
            FilterMode::DateRange => with_sentinel(&self.reference_platforms),
            FilterMode::Live => self.reference_platforms.clone(),
        };
    }
}

pub fn validate_selection(selection: &FilterSelection) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if selection.platform.is_none() {
        errors.insert(FormField::Platform, "Platform is required".to_string());
    }
    if selection.campaigns.is_empty() {
        errors.insert(
            FormField::Campaigns,
            "Select at least one campaign".to_string(),
        );
    }
    if selection.mode == FilterMode::DateRange {
        match selection.date_range.bounds() {
            None => {
                errors.insert(FormField::DateRange, "Date range is required".to_string());
            }
            Some((start, end)) if start > end => {
                errors.insert(
                    FormField::DateRange,
                    "Start date must be on or before end date".to_string(),
                );
            }
            Some(_) => {}
        }
    }

    errors
}
