//! Interview Schedule
//!
//! Scheduler configuration and the date → panel regrouping of generated slots.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::FormError;
use crate::models::{InterviewSlot, ScheduleRequest};

pub const MIN_SLOT_MINS: u32 = 5;
pub const MIN_PANELS: u32 = 1;
pub const NOTIFY_CONFIRM: &str = "Send official email invites to all scheduled students?";

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub drive_id: String,
    pub start_date: String,
    pub end_date: String,
    pub daily_start_time: String,
    pub daily_end_time: String,
    slot_duration_mins: u32,
    pub break_duration_mins: u32,
    panels: u32,
}

impl ScheduleConfig {
    /// Defaults for a schedule starting and ending on `today`
    pub fn new(today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            drive_id: String::new(),
            start_date: date.clone(),
            end_date: date,
            daily_start_time: "09:00".to_string(),
            daily_end_time: "17:00".to_string(),
            slot_duration_mins: 25,
            break_duration_mins: 5,
            panels: 2,
        }
    }

    pub fn slot_duration_mins(&self) -> u32 {
        self.slot_duration_mins
    }

    pub fn panels(&self) -> u32 {
        self.panels
    }

    pub fn set_slot_duration(&mut self, raw: &str) {
        self.slot_duration_mins = parse_at_least(raw, MIN_SLOT_MINS);
    }

    pub fn set_panels(&mut self, raw: &str) {
        self.panels = parse_at_least(raw, MIN_PANELS);
    }

    pub fn to_request(&self) -> Result<ScheduleRequest, FormError> {
        if self.drive_id.is_empty() {
            return Err(FormError::NoDriveSelected);
        }
        Ok(ScheduleRequest {
            drive_id: self.drive_id.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            daily_start_time: self.daily_start_time.clone(),
            daily_end_time: self.daily_end_time.clone(),
            slot_duration_mins: self.slot_duration_mins,
            break_duration_mins: self.break_duration_mins,
            panels: self.panels,
        })
    }
}

fn parse_at_least(raw: &str, min: u32) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(min).max(min)
}

/// The generated schedule together with the drive it was generated for.
///
/// Invitations go to this drive, whatever the config select shows later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleBoard {
    drive_id: Option<String>,
    slots: Vec<InterviewSlot>,
}

impl ScheduleBoard {
    pub fn load(&mut self, drive_id: String, slots: Vec<InterviewSlot>) {
        self.drive_id = Some(drive_id);
        self.slots = slots;
    }

    pub fn clear(&mut self) {
        self.drive_id = None;
        self.slots.clear();
    }

    pub fn slots(&self) -> &[InterviewSlot] {
        &self.slots
    }

    /// Drive to notify; none until a non-empty schedule exists
    pub fn notify_target(&self) -> Option<&str> {
        if self.slots.is_empty() {
            return None;
        }
        self.drive_id.as_deref()
    }

    pub fn reassign(&mut self, updated: InterviewSlot) -> bool {
        replace_slot(&mut self.slots, updated)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelGroup {
    pub panel: String,
    pub slots: Vec<InterviewSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: String,
    pub panels: Vec<PanelGroup>,
}

/// Group slots by date, then by panel, keeping first-seen order at both levels
pub fn group_slots(slots: &[InterviewSlot]) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();
    for slot in slots {
        let day_idx = match days.iter().position(|d| d.date == slot.date_str) {
            Some(idx) => idx,
            None => {
                days.push(DayGroup { date: slot.date_str.clone(), panels: Vec::new() });
                days.len() - 1
            }
        };
        let panels = &mut days[day_idx].panels;
        match panels.iter_mut().find(|p| p.panel == slot.panel) {
            Some(group) => group.slots.push(slot.clone()),
            None => panels.push(PanelGroup { panel: slot.panel.clone(), slots: vec![slot.clone()] }),
        }
    }
    days
}

/// Distinct panel names in first-seen order
pub fn panel_names(slots: &[InterviewSlot]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for slot in slots {
        if !names.contains(&slot.panel) {
            names.push(slot.panel.clone());
        }
    }
    names
}

/// Swap in the server's copy of a reassigned slot
pub fn replace_slot(slots: &mut [InterviewSlot], updated: InterviewSlot) -> bool {
    match slots.iter_mut().find(|s| s.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// "2025-03-10T09:25:00" → "09:25 AM"; unparseable input is returned as-is
pub fn format_slot_time(raw: &str) -> String {
    parse_time(raw)
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.time());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.time())
        .or_else(|| NaiveTime::parse_from_str(raw, "%H:%M").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, date: &str, panel: &str) -> InterviewSlot {
        InterviewSlot {
            id: id.into(),
            drive_id: "d1".into(),
            usn: format!("4NM21CS{}", id),
            name: format!("Student {}", id),
            email: String::new(),
            panel: panel.into(),
            start_time: format!("{}T09:00:00", date),
            end_time: format!("{}T09:25:00", date),
            date_str: date.into(),
        }
    }

    #[test]
    fn test_group_keeps_first_seen_order() {
        let slots = vec![
            slot("1", "2025-03-11", "Panel 2"),
            slot("2", "2025-03-10", "Panel 1"),
            slot("3", "2025-03-11", "Panel 1"),
            slot("4", "2025-03-11", "Panel 2"),
        ];
        let days = group_slots(&slots);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2025-03-11");
        assert_eq!(days[1].date, "2025-03-10");

        let panels: Vec<&str> = days[0].panels.iter().map(|p| p.panel.as_str()).collect();
        assert_eq!(panels, vec!["Panel 2", "Panel 1"]);
        let ids: Vec<&str> = days[0].panels[0].slots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_slots(&[]).is_empty());
    }

    #[test]
    fn test_replace_slot() {
        let mut slots = vec![slot("1", "2025-03-10", "Panel 1"), slot("2", "2025-03-10", "Panel 1")];
        let moved = slot("2", "2025-03-10", "Panel 2");
        assert!(replace_slot(&mut slots, moved));
        assert_eq!(slots[1].panel, "Panel 2");
        assert!(!replace_slot(&mut slots, slot("9", "2025-03-10", "Panel 1")));
        assert_eq!(panel_names(&slots), vec!["Panel 1", "Panel 2"]);
    }

    #[test]
    fn test_format_slot_time() {
        assert_eq!(format_slot_time("2025-03-10T09:25:00"), "09:25 AM");
        assert_eq!(format_slot_time("2025-03-10T14:05:00.123"), "02:05 PM");
        assert_eq!(format_slot_time("2025-03-10T16:30:00+05:30"), "04:30 PM");
        assert_eq!(format_slot_time("soon"), "soon");
    }

    #[test]
    fn test_config_defaults_and_minimums() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut config = ScheduleConfig::new(today);
        assert_eq!(config.start_date, "2025-03-10");
        assert_eq!(config.end_date, "2025-03-10");
        assert_eq!(config.slot_duration_mins(), 25);
        assert_eq!(config.panels(), 2);

        config.set_slot_duration("2");
        assert_eq!(config.slot_duration_mins(), 5);
        config.set_panels("0");
        assert_eq!(config.panels(), 1);
        config.set_panels("");
        assert_eq!(config.panels(), 1);
        config.set_slot_duration("30");
        assert_eq!(config.slot_duration_mins(), 30);
    }

    #[test]
    fn test_generate_requires_drive() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut config = ScheduleConfig::new(today);
        assert_eq!(config.to_request(), Err(FormError::NoDriveSelected));
        config.drive_id = "d1".into();
        let request = config.to_request().unwrap();
        assert_eq!(request.break_duration_mins, 5);
        assert_eq!(request.daily_start_time, "09:00");
    }

    #[test]
    fn test_notify_targets_generated_drive() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut config = ScheduleConfig::new(today);
        let mut board = ScheduleBoard::default();
        assert_eq!(board.notify_target(), None);

        config.drive_id = "drive-a".into();
        let request = config.to_request().unwrap();
        board.load(request.drive_id, vec![slot("1", "2025-03-10", "Panel 1")]);

        config.drive_id = "drive-b".into();
        assert_eq!(board.notify_target(), Some("drive-a"));

        assert!(board.reassign(slot("1", "2025-03-10", "Panel 2")));
        assert_eq!(board.slots()[0].panel, "Panel 2");
        assert_eq!(board.notify_target(), Some("drive-a"));

        board.clear();
        assert_eq!(board.notify_target(), None);
    }

    #[test]
    fn test_empty_schedule_has_no_notify_target() {
        let mut board = ScheduleBoard::default();
        board.load("drive-a".into(), Vec::new());
        assert_eq!(board.notify_target(), None);
        assert!(!board.reassign(slot("1", "2025-03-10", "Panel 1")));
    }
}
