//! Tests for vehicle inquiry domain models.

#[cfg(test)]
mod tests {
    use crate::inquiries::inquiries_model::*;

    #[test]
    fn test_damage_category_storage_strings() {
        assert_eq!(DamageCategory::FrontEnd.as_str(), "Front-End");
        assert_eq!(DamageCategory::RearEnd.as_str(), "Rear-End");
        assert_eq!(DamageCategory::Side.as_str(), "Side");
        assert_eq!(DamageCategory::Roof.as_str(), "Roof");
        assert_eq!(DamageCategory::Flood.as_str(), "Flood");
        assert_eq!(DamageCategory::Other.as_str(), "Other");
    }

    #[test]
    fn test_damage_category_round_trip() {
        for damage in [
            DamageCategory::FrontEnd,
            DamageCategory::RearEnd,
            DamageCategory::Side,
            DamageCategory::Roof,
            DamageCategory::Flood,
            DamageCategory::Other,
        ] {
            assert_eq!(DamageCategory::from(damage.as_str()), damage);
        }
    }

    #[test]
    fn test_unknown_damage_decodes_to_other() {
        assert_eq!(DamageCategory::from("Hail"), DamageCategory::Other);
        assert_eq!(DamageCategory::from(""), DamageCategory::Other);
    }

    #[test]
    fn test_damage_category_serde_rename() {
        let json = serde_json::to_string(&DamageCategory::FrontEnd).unwrap();
        assert_eq!(json, r#""Front-End""#);
        let back: DamageCategory = serde_json::from_str(r#""Rear-End""#).unwrap();
        assert_eq!(back, DamageCategory::RearEnd);
    }

    #[test]
    fn test_profit_potential_uses_expected_fields() {
        let inquiry = VehicleInquiry {
            id: 1,
            make: "Ford".to_string(),
            model: "F-150".to_string(),
            year: 2019,
            miles: 60_000,
            damage: DamageCategory::RearEnd,
            airbags_deployed: false,
            expected_expenses: 3000.0,
            expected_resale_value: 8000.0,
            distance_to_auction: 250.0,
            desired_profit: 2000.0,
            max_bid: 2900.0,
            auction_url: "https://example.com/lot/1".to_string(),
        };
        assert_eq!(inquiry.profit_potential(), 5000.0);
    }
}
