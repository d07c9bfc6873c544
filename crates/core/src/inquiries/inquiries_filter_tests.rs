//! Tests for the inquiry filter engine.

#[cfg(test)]
mod tests {
    use crate::inquiries::inquiries_filter::{filter_inquiries, ClosedRange, InquiryFilter};
    use crate::inquiries::inquiries_model::{DamageCategory, VehicleInquiry};

    fn test_inquiry(id: i32, year: i32, miles: i32, resale: f64, expenses: f64) -> VehicleInquiry {
        VehicleInquiry {
            id,
            make: "Dodge".to_string(),
            model: "Charger".to_string(),
            year,
            miles,
            damage: DamageCategory::FrontEnd,
            airbags_deployed: false,
            expected_expenses: expenses,
            expected_resale_value: resale,
            distance_to_auction: 100.0,
            desired_profit: 1000.0,
            max_bid: 0.0,
            auction_url: String::new(),
        }
    }

    fn wide_open() -> InquiryFilter {
        InquiryFilter {
            year: ClosedRange::new(1950, 2030),
            miles: ClosedRange::new(0, 1_000_000),
            profit_potential: ClosedRange::new(f64::MIN, f64::MAX),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_inquiries(Vec::new(), &wide_open()).is_empty());
    }

    #[test]
    fn test_all_bounds_must_hold() {
        let records = vec![
            test_inquiry(1, 2015, 80_000, 9000.0, 3000.0),
            // year out of range
            test_inquiry(2, 1995, 80_000, 9000.0, 3000.0),
            // miles out of range
            test_inquiry(3, 2015, 250_000, 9000.0, 3000.0),
            // profit potential out of range (1000 < 2000)
            test_inquiry(4, 2015, 80_000, 9000.0, 8000.0),
        ];
        let filter = InquiryFilter {
            year: ClosedRange::new(2000, 2025),
            miles: ClosedRange::new(0, 200_000),
            profit_potential: ClosedRange::new(2000.0, 50_000.0),
        };
        let passed = filter_inquiries(records, &filter);
        assert_eq!(passed.len(), 1);
        assert_eq!(passed[0].id, 1);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let records = vec![test_inquiry(1, 2010, 100_000, 8000.0, 3000.0)];
        let filter = InquiryFilter {
            year: ClosedRange::new(2010, 2010),
            miles: ClosedRange::new(100_000, 100_000),
            profit_potential: ClosedRange::new(5000.0, 5000.0),
        };
        assert_eq!(filter_inquiries(records, &filter).len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            test_inquiry(3, 2012, 50_000, 9000.0, 3000.0),
            test_inquiry(1, 2014, 60_000, 9000.0, 3000.0),
            test_inquiry(2, 2016, 70_000, 9000.0, 3000.0),
        ];
        let ids: Vec<i32> = filter_inquiries(records, &wide_open())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_inverted_bounds_admit_nothing() {
        // min > max is passed through literally, not swapped.
        let records = vec![test_inquiry(1, 2015, 80_000, 9000.0, 3000.0)];
        let filter = InquiryFilter {
            year: ClosedRange::new(2025, 2000),
            miles: ClosedRange::new(0, 1_000_000),
            profit_potential: ClosedRange::new(f64::MIN, f64::MAX),
        };
        assert!(filter_inquiries(records, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            test_inquiry(1, 2015, 80_000, 9000.0, 3000.0),
            test_inquiry(2, 1990, 80_000, 9000.0, 3000.0),
            test_inquiry(3, 2018, 20_000, 12_000.0, 2000.0),
        ];
        let filter = InquiryFilter {
            year: ClosedRange::new(2000, 2025),
            miles: ClosedRange::new(0, 200_000),
            profit_potential: ClosedRange::new(1.0, 50_000.0),
        };
        let once = filter_inquiries(records, &filter);
        let twice = filter_inquiries(once.clone(), &filter);
        assert_eq!(once, twice);
    }
}
