//! Tests for the financial calculator.

#[cfg(test)]
mod tests {
    use crate::valuation::*;

    #[test]
    fn test_max_bid_worked_example() {
        // resale=10000, expenses=2000, distance=500 (x0.4 = 200), profit=1500
        let bid = max_bid(10000.0, 2000.0, 500.0, 1500.0);
        assert_eq!(bid, 6300.0);
    }

    #[test]
    fn test_max_bid_zero_inputs() {
        assert_eq!(max_bid(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_max_bid_can_be_negative() {
        // Unprofitable deal: expenses swamp the resale value. The negative
        // result must come through unclamped.
        let bid = max_bid(3000.0, 5000.0, 1000.0, 1000.0);
        assert_eq!(bid, -3400.0);
    }

    #[test]
    fn test_max_bid_transport_cost_factor() {
        // Only the distance changes; the delta must be distance * 0.4.
        let near = max_bid(10000.0, 0.0, 100.0, 0.0);
        let far = max_bid(10000.0, 0.0, 600.0, 0.0);
        assert_eq!(near - far, 500.0 * 0.4);
    }

    #[test]
    fn test_total_cost() {
        assert_eq!(total_cost(1000.0, 500.0, 300.0, 200.0), 2000.0);
    }

    #[test]
    fn test_profit() {
        assert_eq!(profit(2500.0, 2000.0), 500.0);
    }

    #[test]
    fn test_profit_can_be_negative() {
        assert_eq!(profit(1500.0, 2000.0), -500.0);
    }

    #[test]
    fn test_profit_potential() {
        assert_eq!(profit_potential(8000.0, 3000.0), 5000.0);
    }

    #[test]
    fn test_profit_composes_with_total_cost() {
        let cost = total_cost(12000.0, 2500.0, 1800.0, 700.0);
        assert_eq!(profit(20000.0, cost), 3000.0);
    }
}
