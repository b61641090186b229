use super::super::domain::ScoreBreakdown;

/// Standard rubric weights, in percent. Fixed constants; they must sum to 100.
pub const FIT_WEIGHTS: FitWeights = FitWeights {
    experience: 65,
    qualifications: 10,
    education: 10,
    skills: 15,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitWeights {
    pub experience: u32,
    pub qualifications: u32,
    pub education: u32,
    pub skills: u32,
}

impl FitWeights {
    pub const fn sum(&self) -> u32 {
        self.experience + self.qualifications + self.education + self.skills
    }

    /// Weighted composite, rounded half-up to the nearest integer.
    ///
    /// Integer arithmetic keeps the rounding mode exact: with weights in
    /// percent the weighted sum tops out at 10_000, so `(sum + 50) / 100`
    /// is the half-up rounding of `sum / 100` and the result stays in [0,100].
    pub fn composite(&self, breakdown: &ScoreBreakdown) -> u8 {
        let weighted = self.experience * u32::from(breakdown.experience)
            + self.qualifications * u32::from(breakdown.qualifications)
            + self.education * u32::from(breakdown.education)
            + self.skills * u32::from(breakdown.skills);

        ((weighted + 50) / 100) as u8
    }
}
