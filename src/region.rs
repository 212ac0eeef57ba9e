/// Spatial bounding box of a filter request, in degrees.
///
/// Longitudes run 0..360 eastward; latitudes run 90..-90 north to south,
/// matching the conventions of the filter endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub left_lon: f32,
    pub right_lon: f32,
    pub top_lat: f32,
    pub bottom_lat: f32,
}

impl Region {
    /// The whole globe.
    pub fn full_earth() -> Self {
        Self {
            left_lon: 0.0,
            right_lon: 360.0,
            top_lat: 90.0,
            bottom_lat: -90.0,
        }
    }

    /// Renders the query fragment the filter endpoints expect.
    ///
    /// Field order and the two-decimal formatting are part of the wire
    /// contract and must not change.
    pub fn to_query(&self) -> String {
        format!(
            "leftlon={:.2}&rightlong={:.2}&toplat={:.2}&bottomlat={:.2}",
            self.left_lon, self.right_lon, self.top_lat, self.bottom_lat
        )
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::full_earth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_earth_query_is_literal() {
        assert_eq!(
            Region::full_earth().to_query(),
            "leftlon=0.00&rightlong=360.00&toplat=90.00&bottomlat=-90.00"
        );
    }

    #[test]
    fn renders_two_decimal_places() {
        let region = Region {
            left_lon: 234.25,
            right_lon: 240.75,
            top_lat: 50.5,
            bottom_lat: 31.0,
        };
        assert_eq!(
            region.to_query(),
            "leftlon=234.25&rightlong=240.75&toplat=50.50&bottomlat=31.00"
        );
    }
}
