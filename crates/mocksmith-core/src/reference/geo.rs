//! Country, city, and continent tables for the geographic generators.

pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub continent: &'static str,
    pub cities: &'static [&'static str],
}

pub const CONTINENTS: &[&str] = &[
    "Africa",
    "Asia",
    "Europe",
    "North America",
    "South America",
    "Oceania",
];

pub static COUNTRIES: &[Country] = &[
    Country {
        name: "United States",
        code: "US",
        continent: "North America",
        cities: &["New York", "Los Angeles", "Chicago", "Houston", "Seattle", "Boston"],
    },
    Country {
        name: "Canada",
        code: "CA",
        continent: "North America",
        cities: &["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"],
    },
    Country {
        name: "Mexico",
        code: "MX",
        continent: "North America",
        cities: &["Mexico City", "Guadalajara", "Monterrey", "Puebla", "Cancun"],
    },
    Country {
        name: "Brazil",
        code: "BR",
        continent: "South America",
        cities: &["Sao Paulo", "Rio de Janeiro", "Brasilia", "Salvador", "Curitiba"],
    },
    Country {
        name: "Argentina",
        code: "AR",
        continent: "South America",
        cities: &["Buenos Aires", "Cordoba", "Rosario", "Mendoza", "La Plata"],
    },
    Country {
        name: "Chile",
        code: "CL",
        continent: "South America",
        cities: &["Santiago", "Valparaiso", "Concepcion", "Antofagasta"],
    },
    Country {
        name: "Colombia",
        code: "CO",
        continent: "South America",
        cities: &["Bogota", "Medellin", "Cali", "Barranquilla", "Cartagena"],
    },
    Country {
        name: "United Kingdom",
        code: "GB",
        continent: "Europe",
        cities: &["London", "Manchester", "Birmingham", "Edinburgh", "Glasgow", "Bristol"],
    },
    Country {
        name: "Germany",
        code: "DE",
        continent: "Europe",
        cities: &["Berlin", "Hamburg", "Munich", "Cologne", "Frankfurt", "Stuttgart"],
    },
    Country {
        name: "France",
        code: "FR",
        continent: "Europe",
        cities: &["Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes"],
    },
    Country {
        name: "Spain",
        code: "ES",
        continent: "Europe",
        cities: &["Madrid", "Barcelona", "Valencia", "Seville", "Bilbao"],
    },
    Country {
        name: "Italy",
        code: "IT",
        continent: "Europe",
        cities: &["Rome", "Milan", "Naples", "Turin", "Florence", "Bologna"],
    },
    Country {
        name: "Netherlands",
        code: "NL",
        continent: "Europe",
        cities: &["Amsterdam", "Rotterdam", "The Hague", "Utrecht", "Eindhoven"],
    },
    Country {
        name: "Poland",
        code: "PL",
        continent: "Europe",
        cities: &["Warsaw", "Krakow", "Wroclaw", "Poznan", "Gdansk"],
    },
    Country {
        name: "Russia",
        code: "RU",
        continent: "Europe",
        cities: &["Moscow", "Saint Petersburg", "Novosibirsk", "Yekaterinburg", "Kazan"],
    },
    Country {
        name: "Turkey",
        code: "TR",
        continent: "Asia",
        cities: &["Istanbul", "Ankara", "Izmir", "Bursa", "Antalya"],
    },
    Country {
        name: "China",
        code: "CN",
        continent: "Asia",
        cities: &["Beijing", "Shanghai", "Guangzhou", "Shenzhen", "Chengdu", "Wuhan"],
    },
    Country {
        name: "Japan",
        code: "JP",
        continent: "Asia",
        cities: &["Tokyo", "Osaka", "Kyoto", "Yokohama", "Nagoya", "Sapporo"],
    },
    Country {
        name: "India",
        code: "IN",
        continent: "Asia",
        cities: &["Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai", "Pune"],
    },
    Country {
        name: "South Korea",
        code: "KR",
        continent: "Asia",
        cities: &["Seoul", "Busan", "Incheon", "Daegu", "Daejeon"],
    },
    Country {
        name: "Indonesia",
        code: "ID",
        continent: "Asia",
        cities: &["Jakarta", "Surabaya", "Bandung", "Medan", "Semarang"],
    },
    Country {
        name: "Australia",
        code: "AU",
        continent: "Oceania",
        cities: &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"],
    },
    Country {
        name: "New Zealand",
        code: "NZ",
        continent: "Oceania",
        cities: &["Auckland", "Wellington", "Christchurch", "Hamilton"],
    },
    Country {
        name: "Egypt",
        code: "EG",
        continent: "Africa",
        cities: &["Cairo", "Alexandria", "Giza", "Luxor"],
    },
    Country {
        name: "Nigeria",
        code: "NG",
        continent: "Africa",
        cities: &["Lagos", "Abuja", "Kano", "Ibadan", "Port Harcourt"],
    },
    Country {
        name: "South Africa",
        code: "ZA",
        continent: "Africa",
        cities: &["Johannesburg", "Cape Town", "Durban", "Pretoria"],
    },
    Country {
        name: "Kenya",
        code: "KE",
        continent: "Africa",
        cities: &["Nairobi", "Mombasa", "Kisumu", "Nakuru"],
    },
];

/// Case-insensitive continent lookup.
pub fn continent_exists(name: &str) -> bool {
    CONTINENTS.iter().any(|c| c.eq_ignore_ascii_case(name))
}

/// Case-insensitive country lookup by name.
pub fn country_exists(name: &str) -> bool {
    COUNTRIES.iter().any(|c| c.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_has_cities_and_known_continent() {
        for country in COUNTRIES {
            assert!(!country.cities.is_empty(), "{} has no cities", country.name);
            assert!(
                CONTINENTS.contains(&country.continent),
                "{} has unknown continent {}",
                country.name,
                country.continent
            );
            assert_eq!(country.code.len(), 2);
        }
    }

    #[test]
    fn test_all_continents_populated() {
        for continent in CONTINENTS {
            assert!(
                COUNTRIES.iter().any(|c| c.continent == *continent),
                "no countries for {}",
                continent
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(continent_exists("europe"));
        assert!(country_exists("JAPAN"));
        assert!(!country_exists("Atlantis"));
    }
}
