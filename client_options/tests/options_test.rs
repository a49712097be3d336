#[cfg(test)]
mod tests {
    use client_options::{AnnouncementCharacterLimitOptions, GridVisibilityOptions};
    use serde_json::json;

    #[test]
    fn grid_visibility_reads_back_both_values() {
        for visible in [false, true] {
            let options = GridVisibilityOptions::new(visible);
            assert_eq!(options.is_grid_visible, visible);
        }
    }

    #[test]
    fn sms_character_limit_reads_back_representative_values() {
        for limit in [0, 1, 160, 306, -1, i32::MAX] {
            let options = AnnouncementCharacterLimitOptions::new(limit);
            assert_eq!(options.sms_character_limit, limit);
        }
    }

    #[test]
    fn default_instances_expose_zero_values() {
        assert!(!GridVisibilityOptions::default().is_grid_visible);
        assert_eq!(
            AnnouncementCharacterLimitOptions::default().sms_character_limit,
            0
        );
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        assert_eq!(
            serde_json::to_value(GridVisibilityOptions::new(true)).unwrap(),
            json!({ "isGridVisible": true })
        );
        assert_eq!(
            serde_json::to_value(AnnouncementCharacterLimitOptions::new(160)).unwrap(),
            json!({ "smsCharacterLimit": 160 })
        );
    }

    #[test]
    fn explicit_values_survive_a_serialization_cycle() {
        let grid = GridVisibilityOptions::new(true);
        let encoded = serde_json::to_string(&grid).unwrap();
        let decoded: GridVisibilityOptions = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, grid);

        let announcement = AnnouncementCharacterLimitOptions::new(-42);
        let encoded = serde_json::to_string(&announcement).unwrap();
        let decoded: AnnouncementCharacterLimitOptions = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, announcement);
    }

    #[test]
    fn missing_fields_deserialize_to_zero_values() {
        let grid: GridVisibilityOptions = serde_json::from_str("{}").unwrap();
        assert!(!grid.is_grid_visible);

        let announcement: AnnouncementCharacterLimitOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(announcement.sms_character_limit, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let grid: GridVisibilityOptions =
            serde_json::from_value(json!({ "isGridVisible": true, "legacyFlag": 1 })).unwrap();
        assert!(grid.is_grid_visible);
    }
}
