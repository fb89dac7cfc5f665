use crate::{traits::*, G1Point, G1Projective, G2Point, G2Projective, Scalar};

/// A multi-scalar multiplication algorithm over G1 elements
///
/// Note: "unchecked" refers to the fact that blst will return the identity
/// element, if any of the points are the identity element.
///
/// Calling this method means that the caller is aware that there are no
/// identity elements amongst their points.
///
/// See test below named `blst_footgun` for the edge case.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        // Convert to Projective, since the API forces us to do this
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// A multi-scalar multiplication algorithm over G2 elements
///
/// Returns None if the points and the scalars are not the
/// same length.
///
/// Note: "unchecked" refers to the fact that blst will return the identity
/// element, if any of the points are the identity element.
///
/// Calling this method means that the caller is aware that there are no
/// identity elements amongst their points.
///
/// See test below named `blst_footgun` for the edge case.
pub fn g2_lincomb_unchecked(points: &[G2Point], scalars: &[Scalar]) -> Option<G2Projective> {
    (points.len() == scalars.len()).then(|| {
        // Convert to Projective, since the API forces us to do this
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G2Projective::multi_exp(&proj_points, scalars)
    })
}

/// A multi-scalar multiplication algorithm over G1 elements
///
/// Returns None if the points and the scalars are not the
/// same length.
///
/// This method is a safe wrapper around `g1_lincomb_unsafe`.
///
/// It filters out any points that are the identity.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    // Early return if:
    // - If the lengths mismatch
    // - And either the points or the scalars are empty
    if points.len() != scalars.len() && (scalars.is_empty() || points.is_empty()) {
        return None;
    }

    // Filter out identity points
    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    // If all points were identity, return the group identity
    if points_filtered.is_empty() {
        Some(G1Projective::identity())
    } else {
        // Perform the actual MSM using the filtered data
        g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}

/// A multi-scalar multiplication algorithm over G2 elements
///
/// Returns None if the points and the scalars are not the
/// same length.
///
/// This method is a safe wrapper around `g2_lincomb_unsafe`.
///
/// It filters out any points that are the identity.
pub fn g2_lincomb(points: &[G2Point], scalars: &[Scalar]) -> Option<G2Projective> {
    // Early return if:
    // - If the lengths mismatch
    // - And either the points or the scalars are empty
    if points.len() != scalars.len() && (scalars.is_empty() || points.is_empty()) {
        return None;
    }

    // Filter out identity points
    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    // Return group identity if no valid points remain
    if points_filtered.is_empty() {
        Some(G2Projective::identity())
    } else {
        // Use the unchecked version to perform MSM on valid points
        g2_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}
