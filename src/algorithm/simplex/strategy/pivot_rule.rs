//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule selects the entering column, and decides between leaving rows that
/// attain the same minimum ratio.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotRule {
    /// Enter the column with the most negative relative cost, the lowest index among equals.
    /// Ratio ties go to the lowest row index.
    ///
    /// This rule may cycle on degenerate problems.
    #[default]
    MostNegative,
    /// Bland's rule: enter the first column with a negative relative cost. Ratio ties go to the row
    /// whose basic column has the lowest index.
    ///
    /// This rule never cycles.
    Bland,
}

impl PivotRule {
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of the entering column, or `None` if no relative cost is negative and the
    /// current basis is optimal.
    pub fn select_primal_pivot_column(self, tableau: &Tableau) -> Option<usize> {
        let mut candidates = (0..tableau.nr_columns())
            .filter(|&column| tableau.relative_cost(column).is_negative());

        match self {
            PivotRule::MostNegative => {
                let mut selected: Option<usize> = None;
                for column in candidates {
                    let better = match selected {
                        None => true,
                        Some(current) => tableau.relative_cost(column) < tableau.relative_cost(current),
                    };
                    if better {
                        selected = Some(column);
                    }
                }
                selected
            },
            PivotRule::Bland => candidates.next(),
        }
    }

    /// Whether row `candidate` should replace row `current` as the leaving row, when both attain
    /// the minimum ratio.
    pub(crate) fn prefers_leaving(self, tableau: &Tableau, candidate: usize, current: usize) -> bool {
        match self {
            PivotRule::MostNegative => false,
            PivotRule::Bland => tableau.basis_column(candidate) < tableau.basis_column(current),
        }
    }
}
