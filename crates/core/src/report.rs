/// Tally for one day of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayReport {
    pub day: u32,
    pub orders_made: u32,
    pub orders_missed: u32,
    /// Points credited this day, VIP bonus included.
    pub score: u32,
    /// The player left mid-day; remaining customers were not served.
    pub aborted: bool,
}

impl DayReport {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    pub fn orders_served(&self) -> u32 {
        self.orders_made + self.orders_missed
    }
}
