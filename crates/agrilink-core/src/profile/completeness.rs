//! Profile completeness read-model.

use super::model::FarmProfile;

/// Scores how complete a farm profile is, as a whole percentage.
///
/// Six equally weighted checks: location (both coordinates), soil type,
/// pH, any NPK value, farm size, and season. String fields count only
/// when non-empty; numeric fields count whenever present, zero included.
/// A missing profile scores 0. Rounding happens once, at the end.
///
/// The score is recomputed from the snapshot on every call and never
/// persisted.
pub fn completeness(profile: Option<&FarmProfile>) -> u8 {
    let Some(p) = profile else {
        return 0;
    };

    let checks = [
        p.latitude.is_some() && p.longitude.is_some(),
        has_text(p.soil_type.as_deref()),
        p.ph.is_some(),
        p.nitrogen.is_some() || p.phosphorus.is_some() || p.potassium.is_some(),
        p.farm_size_acres.is_some(),
        has_text(p.season.as_deref()),
    ];
    let done = checks.iter().filter(|&&check| check).count();

    ((done as f64 / checks.len() as f64) * 100.0).round() as u8
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}
