//! Itinerary-driven cost categories.
//!
//! Each category is priced day by day from the itinerary, using flat bases
//! from `ItineraryCostRates` plus add-ons triggered by the day's
//! classification. Inflation is charged on the sum of the other seven.

use log::debug;

use crate::{
    models::{
        crew::CrewMember,
        estimate::{DayCostTotal, ItineraryCostEstimate},
        itinerary::{ActivityTag, ItineraryDay},
        profit::ExpenseCategory,
    },
    services::{
        classifier::{DayClassifier, GUIDED_TAGS},
        cost_calculators::{apply_markup, calculate_crew_cost},
        policy::ItineraryCostRates,
    },
};

pub const TRUCK_FIXED: &str = "Truck Fixed";
pub const OTHER_TRANSPORT: &str = "Other Transport";
pub const ACCOMMODATION: &str = "Accommodation";
pub const FOOD: &str = "Food";
pub const SERVICES: &str = "Services";
pub const CREW_SALARIES: &str = "Crew Salaries";
pub const PARK_FEES: &str = "Park Fees";
pub const INFLATION: &str = "Inflation";

/// Inputs shared by every itinerary category.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryCostInput<'a> {
    pub days: &'a [ItineraryDay],
    pub pax: u32,
    pub crew: &'a [CrewMember],
    pub park_fee_markup: f64,
}

/// One day's share of each category, in category order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DayCategories {
    truck_fixed: f64,
    other_transport: f64,
    accommodation: f64,
    food: f64,
    services: f64,
    crew: f64,
    park_fees: f64,
    inflation: f64,
}

impl DayCategories {
    fn subtotal(&self) -> f64 {
        self.truck_fixed
            + self.other_transport
            + self.accommodation
            + self.food
            + self.services
            + self.crew
            + self.park_fees
    }

    fn total(&self) -> f64 {
        self.subtotal() + self.inflation
    }

    fn add(&mut self, other: &DayCategories) {
        self.truck_fixed += other.truck_fixed;
        self.other_transport += other.other_transport;
        self.accommodation += other.accommodation;
        self.food += other.food;
        self.services += other.services;
        self.crew += other.crew;
        self.park_fees += other.park_fees;
        self.inflation += other.inflation;
    }

    fn into_categories(self) -> Vec<ExpenseCategory> {
        vec![
            ExpenseCategory::new(TRUCK_FIXED, self.truck_fixed),
            ExpenseCategory::new(OTHER_TRANSPORT, self.other_transport),
            ExpenseCategory::new(ACCOMMODATION, self.accommodation),
            ExpenseCategory::new(FOOD, self.food),
            ExpenseCategory::new(SERVICES, self.services),
            ExpenseCategory::new(CREW_SALARIES, self.crew),
            ExpenseCategory::new(PARK_FEES, self.park_fees),
            ExpenseCategory::new(INFLATION, self.inflation),
        ]
    }
}

pub struct ItineraryCostCalculator<'a> {
    classifier: &'a DayClassifier,
    rates: &'a ItineraryCostRates,
}

impl<'a> ItineraryCostCalculator<'a> {
    pub fn new(classifier: &'a DayClassifier, rates: &'a ItineraryCostRates) -> Self {
        Self { classifier, rates }
    }

    /// Truck hire for the day, dearer on off-road days.
    pub fn truck_fixed(&self, day: &ItineraryDay) -> f64 {
        if self.classifier.has_tag(day, ActivityTag::OffRoad) {
            self.rates.truck_daily_rate * self.rates.off_road_multiplier
        } else {
            self.rates.truck_daily_rate
        }
    }

    /// Transfers and flights outside the truck, per person.
    pub fn other_transport(&self, day: &ItineraryDay, pax: u32) -> f64 {
        let mut per_person = 0.0;
        if self.classifier.has_tag(day, ActivityTag::Transfer) {
            per_person += self.rates.transfer_fee;
        }
        if self.classifier.has_tag(day, ActivityTag::Flight) {
            per_person += self.rates.flight_fee;
        }
        per_person * f64::from(pax)
    }

    /// Nights without an accommodation label cost nothing.
    pub fn accommodation(&self, day: &ItineraryDay, pax: u32) -> f64 {
        if !day.has_accommodation() {
            return 0.0;
        }
        let nightly = if self.classifier.is_luxury(day) {
            self.rates.accommodation_base * self.rates.luxury_multiplier
        } else {
            self.rates.accommodation_base
        };
        nightly * f64::from(pax)
    }

    pub fn food(&self, day: &ItineraryDay, pax: u32) -> f64 {
        let mut per_person = 0.0;
        if day.meals.breakfast {
            per_person += self.rates.breakfast;
        }
        if day.meals.lunch {
            per_person += self.rates.lunch;
        }
        if day.meals.dinner {
            per_person += self.rates.dinner;
        }
        per_person * f64::from(pax)
    }

    /// Guide cost for one day; charged on every day once any day is guided.
    pub fn services(&self, guided_itinerary: bool) -> f64 {
        if guided_itinerary {
            self.rates.guide_daily_cost
        } else {
            0.0
        }
    }

    pub fn crew(&self, crew: &[CrewMember]) -> f64 {
        calculate_crew_cost(crew, 1)
    }

    /// A per-day override replaces the policy fee and applies even on days
    /// that are not classified as park days.
    pub fn park_fees(&self, day: &ItineraryDay, pax: u32, markup_percent: f64) -> f64 {
        let per_person = match day.custom_fees.park_fee {
            Some(fee) => fee,
            None if self.classifier.has_tag(day, ActivityTag::Park) => self.rates.park_fee,
            None => 0.0,
        };
        apply_markup(per_person * f64::from(pax), markup_percent)
    }

    pub fn inflation(&self, subtotal: f64) -> f64 {
        subtotal * self.rates.inflation_percent / 100.0
    }

    fn day_categories(&self, day: &ItineraryDay, input: &ItineraryCostInput, guided: bool) -> DayCategories {
        let mut costs = DayCategories {
            truck_fixed: self.truck_fixed(day),
            other_transport: self.other_transport(day, input.pax),
            accommodation: self.accommodation(day, input.pax),
            food: self.food(day, input.pax),
            services: self.services(guided),
            crew: self.crew(input.crew),
            park_fees: self.park_fees(day, input.pax, input.park_fee_markup),
            inflation: 0.0,
        };
        costs.inflation = self.inflation(costs.subtotal());
        costs
    }

    pub fn estimate(&self, input: &ItineraryCostInput) -> ItineraryCostEstimate {
        let guided = self.classifier.itinerary_has_any(input.days, &GUIDED_TAGS);
        let mut totals = DayCategories::default();
        let mut per_day = Vec::with_capacity(input.days.len());

        for day in input.days {
            let costs = self.day_categories(day, input, guided);
            totals.add(&costs);
            per_day.push(DayCostTotal {
                day: day.day,
                date: day.date,
                total: costs.total(),
            });
        }

        let total = totals.total();
        debug!(
            "Itinerary costs for {} days, {} pax: {:.2}",
            input.days.len(),
            input.pax,
            total
        );

        ItineraryCostEstimate {
            categories: totals.into_categories(),
            per_day,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{DayFees, DayMeals};
    use crate::services::policy::KeywordTable;
    use chrono::NaiveDate;

    fn day(index: u32, accommodation: &str, activities: &[&str], meals: DayMeals) -> ItineraryDay {
        ItineraryDay {
            day: index,
            date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap() + chrono::Days::new(u64::from(index - 1)),
            accommodation: accommodation.to_string(),
            accommodation_tier: None,
            meals,
            activities: activities.iter().map(|a| a.to_string()).collect(),
            tags: Vec::new(),
            custom_fees: DayFees::default(),
        }
    }

    fn all_meals() -> DayMeals {
        DayMeals {
            breakfast: true,
            lunch: true,
            dinner: true,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn with_calculator<T>(f: impl FnOnce(&ItineraryCostCalculator) -> T) -> T {
        let classifier = DayClassifier::new(&KeywordTable::default()).unwrap();
        let rates = ItineraryCostRates::default();
        let calculator = ItineraryCostCalculator::new(&classifier, &rates);
        f(&calculator)
    }

    #[test]
    fn test_off_road_raises_truck_rate() {
        with_calculator(|calc| {
            let plain = day(1, "Lodge", &["Game drive"], DayMeals::default());
            let rough = day(2, "Lodge", &["Off-road desert crossing"], DayMeals::default());
            assert_close(calc.truck_fixed(&plain), 250.0);
            assert_close(calc.truck_fixed(&rough), 325.0);
        });
    }

    #[test]
    fn test_luxury_accommodation_multiplier() {
        with_calculator(|calc| {
            let standard = day(1, "Tented camp", &[], DayMeals::default());
            let luxury = day(2, "Luxury Lodge", &[], DayMeals::default());
            let none = day(3, "  ", &[], DayMeals::default());
            assert_close(calc.accommodation(&standard, 4), 320.0);
            assert_close(calc.accommodation(&luxury, 4), 800.0);
            assert_eq!(calc.accommodation(&none, 4), 0.0);
        });
    }

    #[test]
    fn test_park_fee_and_override() {
        with_calculator(|calc| {
            let park = day(1, "Lodge", &["Kruger National Park"], DayMeals::default());
            let mut overridden = day(2, "Lodge", &["Town tour"], DayMeals::default());
            overridden.custom_fees.park_fee = Some(25.0);

            assert_close(calc.park_fees(&park, 3, 0.0), 180.0);
            assert_close(calc.park_fees(&park, 3, 10.0), 198.0);
            assert_close(calc.park_fees(&overridden, 3, 0.0), 75.0);
            assert_eq!(
                calc.park_fees(&day(3, "Lodge", &["Market"], DayMeals::default()), 3, 0.0),
                0.0
            );
        });
    }

    #[test]
    fn test_guide_applies_to_every_day_once_guided() {
        let days = vec![
            day(1, "Hotel", &["Airport transfer"], all_meals()),
            day(2, "Camp", &["Hiking the rim"], all_meals()),
            day(3, "Camp", &["Rest day"], all_meals()),
        ];
        let estimate = with_calculator(|calc| {
            calc.estimate(&ItineraryCostInput {
                days: &days,
                pax: 2,
                crew: &[],
                park_fee_markup: 0.0,
            })
        });
        let services = estimate.categories.iter().find(|c| c.name == SERVICES).unwrap();
        assert_close(services.total, 300.0);
    }

    #[test]
    fn test_estimate_totals_reconcile() {
        let crew = vec![CrewMember {
            role: "driver".to_string(),
            daily_rate: 120.0,
            accommodation_rate: 60.0,
            meal_allowance: 30.0,
        }];
        let days = vec![
            day(1, "Arusha Hotel", &["Airport transfer"], DayMeals { dinner: true, ..Default::default() }),
            day(2, "Premium Serengeti Camp", &["Safari in Serengeti National Park"], all_meals()),
            day(3, "", &["Flight home"], DayMeals { breakfast: true, ..Default::default() }),
        ];
        let estimate = with_calculator(|calc| {
            calc.estimate(&ItineraryCostInput {
                days: &days,
                pax: 4,
                crew: &crew,
                park_fee_markup: 0.0,
            })
        });

        assert_eq!(estimate.per_day.len(), 3);
        assert_eq!(estimate.categories.len(), 8);

        let category_sum: f64 = estimate.categories.iter().map(|c| c.total).sum();
        let day_sum: f64 = estimate.per_day.iter().map(|d| d.total).sum();
        assert_close(category_sum, estimate.total);
        assert_close(day_sum, estimate.total);

        // truck 3*250, transport 4*45 + 4*300, accommodation 4*80 + 4*200,
        // food 4*(20) + 4*(45) + 4*(10), guide 3*100, crew 3*210, park 4*60
        let subtotal = 750.0 + 1380.0 + 1120.0 + 300.0 + 300.0 + 630.0 + 240.0;
        assert_close(estimate.total, subtotal * 1.03);
        let inflation = estimate.categories.iter().find(|c| c.name == INFLATION).unwrap();
        assert_close(inflation.total, subtotal * 0.03);
    }
}
