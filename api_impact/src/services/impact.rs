use common::{error::Res, points};
use sqlx::PgPool;

use crate::dtos::impact::{ImpactData, LeaderboardEntry, UserInfo};

/// Community totals: report count, collected weight, lifetime points and the
/// CO2 offset derived from the collected weight.
pub async fn impact_data(pool: &PgPool) -> Res<ImpactData> {
    let reports_submitted = db::reports::count_reports(pool).await?;
    let amounts = db::reports::get_collected_amounts(pool).await?;
    let waste_collected = sum_waste(amounts.iter().map(String::as_str));
    let tokens_earned = db::rewards::sum_all_points(pool).await?;

    Ok(ImpactData {
        reports_submitted,
        waste_collected,
        tokens_earned,
        co2_offset: points::co2_offset(waste_collected),
    })
}

pub async fn leaderboard(pool: &PgPool) -> Res<Vec<LeaderboardEntry>> {
    let rows = db::rewards::leaderboard_totals(pool).await?;
    let entries = rows
        .into_iter()
        .map(|row| LeaderboardEntry {
            user_info: UserInfo {
                id: row.id,
                email: row.email,
                name: row.name,
            },
            level: points::reward_level(row.points),
            points: row.points,
        })
        .collect();
    Ok(entries)
}

/// Sums free-text amounts, skipping whatever fails to parse.
pub(crate) fn sum_waste<'a>(amounts: impl Iterator<Item = &'a str>) -> f64 {
    amounts
        .map(|amount| points::parse_quantity(amount).unwrap_or(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_units_and_junk_sum_to_the_parseable_part() {
        let amounts = ["12kg", "3.5 liters", "junk", "20"];
        assert_eq!(sum_waste(amounts.into_iter()), 35.5);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(sum_waste(std::iter::empty()), 0.0);
    }
}
