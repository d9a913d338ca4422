use super::category::Category;

/// Outcome of one pipeline run: the winning category, the probability mass it
/// received, the full five-way distribution, and the elapsed wall time.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub confidence: f64,
    pub probabilities: [f64; Category::COUNT],
    pub elapsed_seconds: f64,
}

impl Classification {
    /// The category is always the argmax of the distribution; a strict `>`
    /// scan keeps the first maximum, so ties break toward the lexically
    /// smallest category per `Category::ALL` ordering.
    pub fn from_distribution(
        probabilities: [f64; Category::COUNT],
        elapsed_seconds: f64,
    ) -> Self {
        let mut best = 0;
        for (index, probability) in probabilities.iter().enumerate() {
            if *probability > probabilities[best] {
                best = index;
            }
        }

        Self {
            category: Category::ALL[best],
            confidence: probabilities[best],
            probabilities,
            elapsed_seconds,
        }
    }

    pub fn probability_of(&self, category: Category) -> f64 {
        self.probabilities[category.index()]
    }
}
