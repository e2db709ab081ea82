//! Built-in word lists for [`crate::RuleRecognizer`].
//!
//! Entries are matched case-sensitively against runs of capitalized words, so
//! they are stored in their usual written form.

/// Countries, states and cities (spaCy's GPE).
pub const GEOPOLITICAL: &[&str] = &[
    // Countries
    "Afghanistan", "Albania", "Algeria", "Argentina", "Armenia", "Australia", "Austria",
    "Bangladesh", "Belgium", "Bolivia", "Brazil", "Bulgaria", "Cambodia", "Cameroon", "Canada",
    "Chile", "China", "Colombia", "Croatia", "Cuba", "Cyprus", "Czech Republic", "Czechia",
    "Denmark", "Ecuador", "Egypt", "Estonia", "Ethiopia", "Finland", "France", "Germany", "Ghana",
    "Greece", "Hungary", "Iceland", "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel",
    "Italy", "Jamaica", "Japan", "Jordan", "Kazakhstan", "Kenya", "Latvia", "Lebanon",
    "Lithuania", "Luxembourg", "Malaysia", "Mexico", "Morocco", "Nepal", "Netherlands",
    "New Zealand", "Nigeria", "North Korea", "Norway", "Pakistan", "Peru", "Philippines",
    "Poland", "Portugal", "Qatar", "Romania", "Russia", "Saudi Arabia", "Serbia", "Singapore",
    "Slovakia", "Slovenia", "South Africa", "South Korea", "Spain", "Sri Lanka", "Sweden",
    "Switzerland", "Syria", "Taiwan", "Tanzania", "Thailand", "Tunisia", "Turkey", "Uganda",
    "Ukraine", "United Arab Emirates", "United Kingdom", "United States", "Uruguay",
    "Venezuela", "Vietnam", "Zimbabwe", "UK", "USA", "UAE",
    // US states
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
    // Cities
    "Abu Dhabi", "Accra", "Addis Ababa", "Amsterdam", "Ankara", "Athens", "Atlanta", "Auckland",
    "Baghdad", "Bangkok", "Barcelona", "Beijing", "Beirut", "Belgrade", "Berlin", "Bern",
    "Bogota", "Boston", "Brussels", "Bucharest", "Budapest", "Buenos Aires", "Cairo",
    "Cape Town", "Casablanca", "Chicago", "Copenhagen", "Dallas", "Delhi", "Dhaka", "Doha",
    "Dubai", "Dublin", "Edinburgh", "Frankfurt", "Geneva", "Hamburg", "Hanoi", "Helsinki",
    "Hong Kong", "Houston", "Istanbul", "Jakarta", "Jerusalem", "Johannesburg", "Karachi",
    "Kathmandu", "Kyiv", "Lagos", "Lahore", "Lima", "Lisbon", "London", "Los Angeles", "Lyon",
    "Madrid", "Manchester", "Manila", "Marseille", "Melbourne", "Mexico City", "Miami", "Milan",
    "Montreal", "Moscow", "Mumbai", "Munich", "Nairobi", "Naples", "New Delhi", "Osaka", "Oslo",
    "Ottawa", "Paris", "Philadelphia", "Prague", "Rio de Janeiro", "Riyadh", "Rome",
    "San Francisco", "Santiago", "Seattle", "Seoul", "Shanghai", "Stockholm", "Sydney",
    "Taipei", "Tehran", "Tel Aviv", "Tokyo", "Toronto", "Vancouver", "Venice", "Vienna",
    "Warsaw", "Zurich",
];

/// Non-political locations: continents, regions, bodies of water, ranges.
pub const NATURAL_LOCATIONS: &[&str] = &[
    "Africa", "Antarctica", "Asia", "Europe", "North America", "South America", "Latin America",
    "Oceania", "Middle East", "Scandinavia", "Balkans", "Caribbean", "Mediterranean", "Sahara",
    "Siberia", "Arctic", "Himalayas", "Alps", "Andes", "Rocky Mountains", "Amazon", "Nile",
    "Danube", "Rhine", "Thames", "Pacific Ocean", "Atlantic Ocean", "Indian Ocean",
    "Silicon Valley", "Gulf of Mexico",
];

/// Common given names used to anchor PERSON spans.
///
/// Names that double as places or months (Georgia, Florence, June) are not
/// listed; the gazetteer and the date rules claim those words first.
pub const GIVEN_NAMES: &[&str] = &[
    "Aaron", "Adam", "Ahmed", "Aisha", "Alan", "Albert", "Alex", "Alexander", "Alice", "Amelia",
    "Amy", "Ana", "Andrew", "Angela", "Anna", "Anne", "Anthony", "Antonio", "Arjun", "Barbara",
    "Ben", "Benjamin", "Bob", "Brian", "Carlos", "Carol", "Catherine", "Charles", "Chen",
    "Chris", "Christopher", "Daniel", "David", "Deborah", "Diana", "Donald", "Edward", "Elena",
    "Elizabeth", "Emily", "Emma", "Eric", "Fatima", "Frank", "Gary", "George", "Grace",
    "Hannah", "Harry", "Helen", "Henry", "Hiroshi", "Ibrahim", "Isabella", "Ivan", "Jack",
    "Jacob", "James", "Jane", "Jason", "Jennifer", "Jessica", "John", "Jonathan", "Jose",
    "Joseph", "Joshua", "Juan", "Julia", "Karen", "Kevin", "Laura", "Linda", "Lisa", "Liu",
    "Lucas", "Luis", "Maria", "Mark", "Mary", "Matthew", "Mei", "Michael", "Mohammed",
    "Muhammad", "Nancy", "Nicholas", "Noah", "Olivia", "Oliver", "Omar", "Patricia", "Paul",
    "Peter", "Priya", "Rachel", "Rahul", "Raj", "Rebecca", "Richard", "Robert", "Ryan",
    "Sandra", "Sarah", "Sofia", "Sophia", "Stephen", "Steven", "Susan", "Thomas", "Timothy",
    "Wei", "William", "Yuki", "Zoe",
];

/// Titles that introduce a PERSON span; the title itself is not part of it.
pub const HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Miss", "Mx", "Dr", "Prof", "Professor", "Sir", "Dame", "Rev", "Hon",
    "Capt", "Col", "Gen", "Lt", "Sgt", "Judge",
];

/// Trailing words that mark a run of capitalized words as an organisation.
pub const ORG_SUFFIXES: &[&str] = &[
    "Inc", "Ltd", "LLC", "LLP", "Corp", "Corporation", "Company", "Co", "GmbH", "AG", "SA",
    "PLC", "Limited", "Group", "Holdings", "Bank", "University", "College", "Institute",
    "Foundation", "Association", "Agency", "Ministry", "Department", "Technologies",
    "Solutions", "Systems", "Labs",
];

/// Lowercase connectors allowed inside a run of capitalized words.
pub const PARTICLES: &[&str] = &[
    "de", "del", "della", "der", "den", "di", "da", "du", "la", "le", "van", "von", "bin",
    "al", "of",
];
