// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::Persistence;
use diesel::connection::SimpleConnection;

/// Three programs serving New York and Tokyo.
///
/// Airports are inserted out of code order. ANA maps only EWR of the New
/// York airports.
const SEED_SQL: &str = "
INSERT INTO alliances (alliance_id, name, code) VALUES
    (1, 'Star Alliance', 'STAR'),
    (2, 'oneworld', 'OW');

INSERT INTO airline_programs
    (program_id, name, code, alliance_id, has_dynamic_pricing, pricing_model, search_url_template)
VALUES
    (1, 'United MileagePlus', 'UA', 1, 1, 'region',
     'https://www.united.com/en/us/fsr/choose-flights?f={origin}&t={destination}&d={date}'),
    (2, 'ANA Mileage Club', 'NH', 1, 0, 'distance', NULL),
    (3, 'American AAdvantage', 'AA', 2, 1, 'region', NULL);

INSERT INTO credit_card_programs (card_program_id, name, code) VALUES
    (1, 'Chase Ultimate Rewards', 'UR'),
    (2, 'Amex Membership Rewards', 'MR');

INSERT INTO transfer_partnerships
    (partnership_id, card_program_id, program_id, transfer_ratio, transfer_time_hours,
     is_bonus_active, bonus_ratio, bonus_expires_at)
VALUES
    (1, 1, 1, '1.0', 0, 0, NULL, NULL),
    (2, 2, 2, '1.0', 48, 1, '1.3', '2026-12-31'),
    (3, 2, 3, '1', 72, 0, NULL, NULL);

INSERT INTO regions (region_id, program_id, name, code) VALUES
    (10, 1, 'North America', NULL),
    (11, 1, 'Japan', 'JP'),
    (20, 2, 'North America', NULL),
    (21, 2, 'Asia 2', NULL),
    (30, 3, 'Continental US', NULL),
    (31, 3, 'Asia Region 1', NULL);

INSERT INTO airports (code, name, city, country, country_code, lat, lng, metro) VALUES
    ('NRT', 'Narita International Airport', 'Tokyo', 'Japan', 'JP', 35.7647, 140.3864, 'TYO'),
    ('JFK', 'John F. Kennedy International Airport', 'New York', 'United States', 'US', 40.6413, -73.7781, 'NYC'),
    ('LGA', 'LaGuardia Airport', 'New York', 'United States', 'US', NULL, NULL, 'NYC'),
    ('EWR', 'Newark Liberty International Airport', 'Newark', 'United States', 'US', NULL, NULL, 'NYC'),
    ('HND', 'Tokyo Haneda Airport', 'Tokyo', 'Japan', 'JP', NULL, NULL, 'TYO'),
    ('LAX', 'Los Angeles International Airport', 'Los Angeles', 'United States', 'US', NULL, NULL, '');

INSERT INTO airport_region_mappings (mapping_id, airport_code, region_id, program_id) VALUES
    (1, 'JFK', 10, 1),
    (2, 'EWR', 10, 1),
    (3, 'LGA', 10, 1),
    (4, 'NRT', 11, 1),
    (5, 'HND', 11, 1),
    (6, 'EWR', 20, 2),
    (7, 'NRT', 21, 2),
    (8, 'JFK', 30, 3),
    (9, 'NRT', 31, 3);

INSERT INTO airline_routes (route_id, program_id, origin_airport_code, destination_airport_code) VALUES
    (1, 1, 'JFK', 'NRT'),
    (2, 2, 'EWR', 'NRT'),
    (3, 3, 'JFK', 'NRT');

INSERT INTO award_charts
    (chart_id, program_id, origin_region_id, destination_region_id, cabin_class, partner_type,
     min_miles, max_miles, typical_miles, is_one_way, notes)
VALUES
    (1, 1, 10, 11, 'economy', 'any', 35000, 35000, NULL, 1, NULL),
    (2, 2, 20, 21, 'economy', 'partner', 60000, 60000, NULL, 1, 'Low season'),
    (3, 3, 30, 31, 'economy', 'any', 60000, 80000, 70000, 1, NULL),
    (4, 1, 10, 11, 'business', 'partner', 88000, 88000, NULL, 0, NULL);
";

pub fn execute_sql(persistence: &mut Persistence, sql: &str) {
    persistence.conn.batch_execute(sql).unwrap();
}

pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    execute_sql(&mut persistence, SEED_SQL);
    persistence
}
