/// Reaching level n+1 from level n costs `500 * n^2` XP, so early levels come
/// quickly and the curve flattens out: level 2 at 500 XP, level 3 at 2,500,
/// level 4 at 7,000.
const LEVEL_COST_BASE: i64 = 500;

/// Derives a level from a cumulative XP total. Level 1 at 0 XP; negative
/// inputs (which the award path never produces) clamp to level 1.
pub fn level_for_xp(xp: i32) -> i32 {
    let xp = i64::from(xp.max(0));
    let mut level: i32 = 1;
    let mut threshold: i64 = 0;
    loop {
        threshold += LEVEL_COST_BASE * i64::from(level) * i64::from(level);
        if xp < threshold {
            return level;
        }
        level += 1;
    }
}
