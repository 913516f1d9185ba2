use crate::{
    client::model::{Location, QueryResponse},
    page::{LocationList, PageSurface, TextRegion},
};

/// Writes a query response into the page's text regions and location lists
pub struct ResponsePresenter;

impl ResponsePresenter {
    pub fn present<P>(page: &mut P, response: &QueryResponse)
    where
        P: PageSurface + ?Sized,
    {
        for region in TextRegion::ALL {
            page.set_text(region, Self::region_text(response, region));
        }
        Self::present_list(page, LocationList::Explicit, &response.explicit_locations);
        Self::present_list(page, LocationList::Implicit, &response.implicit_locations);
    }

    pub fn present_list<P>(page: &mut P, list: LocationList, locations: &[Location])
    where
        P: PageSurface + ?Sized,
    {
        let items: Vec<String> = locations.iter().map(Self::location_line).collect();
        page.set_list_items(list, &items);
    }

    /// `"<name> (<type>) - [<lat>, <lon>]"`
    pub fn location_line(location: &Location) -> String {
        format!(
            "{} ({}) - [{}, {}]",
            location.name,
            location.location_type,
            format_coordinate(location.coordinates[0]),
            format_coordinate(location.coordinates[1])
        )
    }

    fn region_text(response: &QueryResponse, region: TextRegion) -> &str {
        let text = match region {
            TextRegion::QueryResponse => &response.query_response,
            TextRegion::GeospatialContext => &response.geospatial_context,
            TextRegion::AdditionalInfo => &response.additional_info,
        };
        text.as_deref().unwrap_or("")
    }
}

/// Shortest round-trip form, printed the way a JavaScript number converts to
/// a string: integers without a fractional part, exponent notation below
/// 1e-6 and from 1e21 up.
fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::model::MapData,
        page::headless::HeadlessPage,
    };

    fn response(explicit: Vec<Location>) -> QueryResponse {
        QueryResponse {
            query_response: Some("Paris is the capital of France.".to_string()),
            geospatial_context: None,
            additional_info: Some("Population 2.1M".to_string()),
            intent: None,
            explicit_locations: explicit,
            implicit_locations: Vec::new(),
            map_data: MapData {
                center: [0.0, 0.0],
                zoom: 2.0,
                markers: Vec::new(),
                boundaries: None,
            },
        }
    }

    #[test]
    fn test_location_line_format() {
        let paris = Location::new("Paris", "City", [48.8566, 2.3522]);
        assert_eq!(
            ResponsePresenter::location_line(&paris),
            "Paris (City) - [48.8566, 2.3522]"
        );

        let null_island = Location::new("Null Island", "POI", [-0.0, 10.0]);
        assert_eq!(
            ResponsePresenter::location_line(&null_island),
            "Null Island (POI) - [0, 10]"
        );
    }

    #[test]
    fn test_coordinate_formatting_matches_script_number_output() {
        assert_eq!(format_coordinate(2.0), "2");
        assert_eq!(format_coordinate(-3.7492), "-3.7492");
        assert_eq!(format_coordinate(0.000001), "0.000001");
        assert_eq!(format_coordinate(1e-7), "1e-7");
        assert_eq!(format_coordinate(-2.5e-8), "-2.5e-8");
        assert_eq!(format_coordinate(1e21), "1e+21");
        assert_eq!(format_coordinate(123456789012345680000.0), "123456789012345680000");

        let tiny = Location::new("Offshore", "Buoy", [1e-7, 0.0]);
        assert_eq!(
            ResponsePresenter::location_line(&tiny),
            "Offshore (Buoy) - [1e-7, 0]"
        );
    }

    #[test]
    fn test_present_fills_regions_and_lists() {
        let mut page = HeadlessPage::new();
        let paris = Location::new("Paris", "City", [48.8566, 2.3522]);
        ResponsePresenter::present(&mut page, &response(vec![paris]));

        assert_eq!(
            page.text(TextRegion::QueryResponse),
            "Paris is the capital of France."
        );
        assert_eq!(page.text(TextRegion::GeospatialContext), "");
        assert_eq!(page.text(TextRegion::AdditionalInfo), "Population 2.1M");
        assert_eq!(
            page.list_items(LocationList::Explicit),
            &["Paris (City) - [48.8566, 2.3522]".to_string()]
        );
        assert!(page.list_items(LocationList::Implicit).is_empty());
    }

    #[test]
    fn test_present_replaces_previous_content() {
        let mut page = HeadlessPage::new();
        let paris = Location::new("Paris", "City", [48.8566, 2.3522]);
        ResponsePresenter::present(&mut page, &response(vec![paris]));

        let mut second = response(Vec::new());
        second.query_response = None;
        ResponsePresenter::present(&mut page, &second);

        assert_eq!(page.text(TextRegion::QueryResponse), "");
        assert!(page.list_items(LocationList::Explicit).is_empty());
    }

    #[test]
    fn test_markup_is_passed_through_as_text() {
        let mut page = HeadlessPage::new();
        let sneaky = Location::new("<b>Oslo</b>", "City", [59.9139, 10.7522]);
        ResponsePresenter::present_list(&mut page, LocationList::Implicit, &[sneaky]);
        assert_eq!(
            page.list_items(LocationList::Implicit)[0],
            "<b>Oslo</b> (City) - [59.9139, 10.7522]"
        );
    }
}
