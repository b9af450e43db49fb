//! Static two-tier coordinate tables: country -> city -> point, and
//! country -> centroid. Read-only for the pipeline's lifetime.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::GeoPoint;

const fn gp(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint { lat, lon }
}

pub static CITY_COORDS: Lazy<HashMap<&'static str, HashMap<&'static str, GeoPoint>>> =
    Lazy::new(|| {
        let mut table: HashMap<&'static str, HashMap<&'static str, GeoPoint>> = HashMap::new();

        table.insert(
            "China",
            HashMap::from([
                ("Guangzhou", gp(23.1291, 113.2644)),
                ("Shanghai", gp(31.2304, 121.4737)),
                ("Beijing", gp(39.9042, 116.4074)),
                ("Shenzhen", gp(22.5431, 114.0579)),
                ("Hangzhou", gp(30.2741, 120.1551)),
                ("Chengdu", gp(30.5728, 104.0668)),
                ("Wuhan", gp(30.5928, 114.3055)),
                ("Nanjing", gp(32.0603, 118.7969)),
                ("Changping", gp(40.2248, 116.2317)),
            ]),
        );
        table.insert(
            "United States",
            HashMap::from([
                ("Duarte", gp(34.1395, -117.9773)),
                ("Los Angeles", gp(34.0522, -118.2437)),
                ("Stanford", gp(37.4241, -122.1661)),
                ("New Haven", gp(41.3083, -72.9279)),
                ("Atlanta", gp(33.7490, -84.3880)),
                ("Chicago", gp(41.8781, -87.6298)),
                ("Westwood", gp(39.0406, -94.6169)),
                ("Minneapolis", gp(44.9778, -93.2650)),
                ("St Louis", gp(38.6270, -90.1994)),
                ("New York", gp(40.7128, -74.0060)),
                ("The Bronx", gp(40.8448, -73.8648)),
                ("Portland", gp(45.5152, -122.6784)),
                ("Philadelphia", gp(39.9526, -75.1652)),
                ("Dallas", gp(32.7767, -96.7970)),
                ("Houston", gp(29.7604, -95.3698)),
                ("San Antonio", gp(29.4241, -98.4936)),
                ("Salt Lake City", gp(40.7608, -111.8910)),
                ("Boston", gp(42.3601, -71.0589)),
                ("San Francisco", gp(37.7749, -122.4194)),
                ("Seattle", gp(47.6062, -122.3321)),
                ("Washington", gp(38.9072, -77.0369)),
                ("Baltimore", gp(39.2904, -76.6122)),
                ("Pittsburgh", gp(40.4406, -79.9959)),
                ("Memphis", gp(35.1495, -90.0490)),
                ("Nashville", gp(36.1627, -86.7816)),
                ("Miami", gp(25.7617, -80.1918)),
                ("Denver", gp(39.7392, -104.9903)),
                ("Phoenix", gp(33.4484, -112.0740)),
            ]),
        );
        table.insert(
            "Denmark",
            HashMap::from([
                ("Herlev", gp(55.7237, 12.4400)),
                ("Copenhagen", gp(55.6761, 12.5683)),
            ]),
        );
        table.insert(
            "Australia",
            HashMap::from([
                ("Camperdown", gp(-33.8897, 151.1764)),
                ("Melbourne", gp(-37.8136, 144.9631)),
                ("Nedlands", gp(-31.9818, 115.8073)),
                ("Sydney", gp(-33.8688, 151.2093)),
                ("Brisbane", gp(-27.4698, 153.0251)),
            ]),
        );
        table.insert(
            "Canada",
            HashMap::from([
                ("Toronto", gp(43.6532, -79.3832)),
                ("Montreal", gp(45.5017, -73.5673)),
                ("Vancouver", gp(49.2827, -123.1207)),
            ]),
        );
        table.insert(
            "Germany",
            HashMap::from([
                ("Hamburg", gp(53.5511, 9.9937)),
                ("Berlin", gp(52.5200, 13.4050)),
                ("Munich", gp(48.1351, 11.5820)),
            ]),
        );
        table.insert(
            "France",
            HashMap::from([
                ("Paris", gp(48.8566, 2.3522)),
                ("Lyon", gp(45.7640, 4.8357)),
                ("Marseille", gp(43.2965, 5.3698)),
            ]),
        );
        table.insert(
            "United Kingdom",
            HashMap::from([
                ("London", gp(51.5074, -0.1278)),
                ("Manchester", gp(53.4808, -2.2426)),
                ("Edinburgh", gp(55.9533, -3.1883)),
            ]),
        );
        table.insert(
            "Italy",
            HashMap::from([
                ("Rome", gp(41.9028, 12.4964)),
                ("Milan", gp(45.4642, 9.1900)),
                ("Naples", gp(40.8518, 14.2681)),
            ]),
        );
        table.insert(
            "Spain",
            HashMap::from([
                ("Madrid", gp(40.4168, -3.7038)),
                ("Barcelona", gp(41.3851, 2.1734)),
            ]),
        );
        table.insert(
            "Netherlands",
            HashMap::from([
                ("Amsterdam", gp(52.3676, 4.9041)),
                ("Rotterdam", gp(51.9225, 4.47917)),
            ]),
        );
        table.insert(
            "Switzerland",
            HashMap::from([
                ("Zurich", gp(47.3769, 8.5417)),
                ("Geneva", gp(46.2044, 6.1432)),
            ]),
        );
        table.insert(
            "Japan",
            HashMap::from([
                ("Tokyo", gp(35.6762, 139.6503)),
                ("Osaka", gp(34.6937, 135.5023)),
                ("Kyoto", gp(35.0116, 135.7681)),
            ]),
        );
        table.insert(
            "South Korea",
            HashMap::from([
                ("Seoul", gp(37.5665, 126.9780)),
                ("Busan", gp(35.1796, 129.0756)),
            ]),
        );
        table.insert(
            "India",
            HashMap::from([
                ("Mumbai", gp(19.0760, 72.8777)),
                ("Delhi", gp(28.7041, 77.1025)),
                ("Bangalore", gp(12.9716, 77.5946)),
            ]),
        );
        table.insert(
            "Brazil",
            HashMap::from([
                ("São Paulo", gp(-23.5505, -46.6333)),
                ("Rio de Janeiro", gp(-22.9068, -43.1729)),
            ]),
        );
        table.insert("Hong Kong", HashMap::from([("Hong Kong", gp(22.3193, 114.1694))]));
        table.insert("Singapore", HashMap::from([("Singapore", gp(1.3521, 103.8198))]));
        table.insert(
            "Israel",
            HashMap::from([
                ("Tel Aviv", gp(32.0853, 34.7818)),
                ("Jerusalem", gp(31.7683, 35.2137)),
            ]),
        );
        table.insert("Belgium", HashMap::from([("Brussels", gp(50.8503, 4.3517))]));
        table.insert("Sweden", HashMap::from([("Stockholm", gp(59.3293, 18.0686))]));
        table.insert("Norway", HashMap::from([("Oslo", gp(59.9139, 10.7522))]));
        table.insert("Austria", HashMap::from([("Vienna", gp(48.2082, 16.3738))]));
        table.insert("Poland", HashMap::from([("Warsaw", gp(52.2297, 21.0122))]));
        table.insert(
            "Turkey",
            HashMap::from([
                ("Istanbul", gp(41.0082, 28.9784)),
                ("Ankara", gp(39.9334, 32.8597)),
            ]),
        );
        table.insert("Mexico", HashMap::from([("Mexico City", gp(19.4326, -99.1332))]));
        table.insert(
            "Argentina",
            HashMap::from([("Buenos Aires", gp(-34.6037, -58.3816))]),
        );
        table.insert("Chile", HashMap::from([("Santiago", gp(-33.4489, -70.6693))]));
        table.insert(
            "South Africa",
            HashMap::from([
                ("Cape Town", gp(-33.9249, 18.4241)),
                ("Johannesburg", gp(-26.2041, 28.0473)),
            ]),
        );
        table.insert("Thailand", HashMap::from([("Bangkok", gp(13.7563, 100.5018))]));
        table.insert(
            "Malaysia",
            HashMap::from([("Kuala Lumpur", gp(3.1390, 101.6869))]),
        );

        table
    });

pub static COUNTRY_COORDS: Lazy<HashMap<&'static str, GeoPoint>> = Lazy::new(|| {
    HashMap::from([
        ("China", gp(35.0, 105.0)),
        ("United States", gp(37.0902, -95.7129)),
        ("Denmark", gp(56.2639, 9.5018)),
        ("Australia", gp(-25.2744, 133.7751)),
        ("Canada", gp(56.1304, -106.3468)),
        ("Germany", gp(51.1657, 10.4515)),
        ("France", gp(46.2276, 2.2137)),
        ("United Kingdom", gp(55.3781, -3.4360)),
        ("Italy", gp(41.8719, 12.5674)),
        ("Spain", gp(40.4637, -3.7492)),
        ("Netherlands", gp(52.1326, 5.2913)),
        ("Switzerland", gp(46.8182, 8.2275)),
        ("Japan", gp(36.2048, 138.2529)),
        ("South Korea", gp(35.9078, 127.7669)),
        ("India", gp(20.5937, 78.9629)),
        ("Brazil", gp(-14.2350, -51.9253)),
        ("Hong Kong", gp(22.3193, 114.1694)),
        ("Singapore", gp(1.3521, 103.8198)),
        ("Israel", gp(31.0461, 34.8516)),
        ("Belgium", gp(50.5039, 4.4699)),
        ("Sweden", gp(60.1282, 18.6435)),
        ("Norway", gp(60.4720, 8.4689)),
        ("Austria", gp(47.5162, 14.5501)),
        ("Poland", gp(51.9194, 19.1451)),
        ("Turkey", gp(38.9637, 35.2433)),
        ("Mexico", gp(23.6345, -102.5528)),
        ("Argentina", gp(-38.4161, -63.6167)),
        ("Chile", gp(-35.6751, -71.5430)),
        ("South Africa", gp(-30.5595, 22.9375)),
        ("Thailand", gp(15.8700, 100.9925)),
        ("Malaysia", gp(4.2105, 101.9758)),
        ("Finland", gp(61.9241, 25.7482)),
        ("Estonia", gp(58.5953, 25.0136)),
        ("Lithuania", gp(55.1694, 23.8813)),
        ("Czech Republic", gp(49.8175, 15.4730)),
        ("Greece", gp(39.0742, 21.8243)),
        ("Portugal", gp(39.3999, -8.2245)),
        ("Ireland", gp(53.4129, -8.2439)),
        ("New Zealand", gp(-40.9006, 174.8860)),
        ("Taiwan", gp(23.6978, 120.9605)),
        ("Costa Rica", gp(9.7489, -83.7534)),
        ("Kenya", gp(-0.0236, 37.9062)),
    ])
});
