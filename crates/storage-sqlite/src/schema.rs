diesel::table! {
    parts (id) {
        id -> Integer,
        part_name -> Text,
        vendor -> Text,
        cost -> Double,
        date_ordered -> Date,
    }
}

diesel::table! {
    vehicles (id) {
        id -> Integer,
        vehicle_name -> Text,
        mileage -> Integer,
        resale_value -> Double,
        purchase_cost -> Double,
        repair_cost -> Double,
        part_cost -> Double,
        misc_cost -> Double,
        profit -> Double,
    }
}

diesel::table! {
    vehicle_inquiries (id) {
        id -> Integer,
        make -> Text,
        model -> Text,
        year -> Integer,
        miles -> Integer,
        damage -> Text,
        airbags_deployed -> Bool,
        expected_expenses -> Double,
        expected_resale_value -> Double,
        distance_to_auction -> Double,
        desired_profit -> Double,
        max_bid -> Double,
        auction_url -> Text,
    }
}

diesel::table! {
    ledger_entries (id) {
        id -> Integer,
        inquiry_id -> Integer,
        part_name -> Text,
        vendor -> Text,
        cost -> Double,
        date_ordered -> Date,
        notes -> Nullable<Text>,
    }
}

diesel::joinable!(ledger_entries -> vehicle_inquiries (inquiry_id));

diesel::allow_tables_to_appear_in_same_query!(
    ledger_entries,
    parts,
    vehicle_inquiries,
    vehicles,
);
