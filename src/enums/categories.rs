//! Driving license categories as defined by the EU regulatory framework.

use rusqlite::types::Value;

use super::{DbEnum, HasModel, SeedDb};
use crate::models::DrivingLicenseCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrivingLicenseCategories {
    AM,
    A1,
    A2,
    A,
    B1,
    B,
    BE,
    C1,
    C1E,
    C,
    CE,
    D1,
    D1E,
    D,
    DE,
}

use DrivingLicenseCategories::*;

const CASES: &[DrivingLicenseCategories] =
    &[AM, A1, A2, A, B1, B, BE, C1, C1E, C, CE, D1, D1E, D, DE];

impl DbEnum for DrivingLicenseCategories {
    const ENUM_NAME: &'static str = "DrivingLicenseCategories";

    fn cases() -> &'static [Self] {
        CASES
    }

    fn value(self) -> i64 {
        match self {
            AM => 1,
            A1 => 2,
            A2 => 3,
            A => 4,
            B1 => 5,
            B => 6,
            BE => 7,
            C1 => 8,
            C1E => 9,
            C => 10,
            CE => 11,
            D1 => 12,
            D1E => 13,
            D => 14,
            DE => 15,
        }
    }

    fn name(self) -> &'static str {
        match self {
            AM => "AM",
            A1 => "A1",
            A2 => "A2",
            A => "A",
            B1 => "B1",
            B => "B",
            BE => "BE",
            C1 => "C1",
            C1E => "C1E",
            C => "C",
            CE => "CE",
            D1 => "D1",
            D1E => "D1E",
            D => "D",
            DE => "DE",
        }
    }

    fn description(self) -> &'static str {
        match self {
            AM => "È richiesta per la guida di ciclomotori a 2 o 3 ruote e di quadricicli leggeri (cilindrata minore o uguale a 50 cm 3 o potenza minore o uguale a 4 kW, velocità minore o uguale a 45 km/h, massa a vuoto minore o uguale a 350 kg, esclusa la massa delle batterie per i veicoli elettrici). Questa patente si può conseguire in Italia a partire da 14 anni, ma abilita alla guida su tutto il territorio UE e SEE dal compimento dei 16 anni, fatta salva la possibilità di altri Stati membri di riconoscere la validità nel proprio territorio di una patente AM rilasciata a 14 anni.",
            A1 => "È richiesta per la guida di motocicli di cilindrata minore o uguale a 125 cm3, potenza minore o uguale a 11 kW e rapporto potenza/massa minore o uguale a 0,10 kW/kg, nonché di tricicli di potenza minore o uguale a 15 kW. Questa patente si può conseguire a partire da 16 anni. Inoltre abilita a guidare tutti i veicoli di categoria AM.",
            A2 => "È richiesta per la guida di motocicli di potenza minore o uguale a 35 kW e rapporto potenza/massa minore o uguale a 0,20 kW/kg, tali che non derivino da una versione che sviluppi più del doppio della potenza massima consentita, nonché di tricicli di potenza minore o uguale a 15 kW. Questa patente si può conseguire a partire da 18 anni. Inoltre abilita a guidare tutti i veicoli di categoria AM e A1.",
            A => "È richiesta per la guida di motocicli senza limitazioni, nonché di tricicli di potenza superiore a 15 kW, a condizione che il titolare abbia compiuto 21 anni. Questa patente si può conseguire con accesso graduale a partire da 20 anni, a condizione di essere titolare di patente di cat. A2 da almeno 2 anni, oppure con accesso diretto a partire da 24 anni. In ogni caso occorrerà superare una prova pratica di guida su veicolo della categoria corrispondente. Inoltre abilita a guidare tutti i veicoli di categoria AM, A1 e A2.",
            B1 => "È richiesta per la guida dei quadricicli diversi da quelli leggeri (massa a vuoto minore o uguale a 400 kg o 550 kg se per trasporto cose, esclusa la massa delle batterie per i veicoli elettrici e potenza nominale netta minore o uguale a 15 kW). Questa patente si può conseguire a partire da 16 anni e non abilita alla guida di alcun motociclo. Inoltre abilita a guidare tutti i veicoli di categoria AM.",
            B => "È richiesta per la guida di autovetture (numero di posti minore o uguale a 9 e massa massima autorizzata minore o uguale a 3500 kg). Questa patente si può conseguire a partire da 18 anni. Con la patente B è possibile guidare anche un complesso di veicoli composto da motrice di categoria B e: rimorchio con massa massima autorizzata minore o uguale a 750 kg, oppure rimorchio con massa massima autorizzata superiore a 750 kg, purché la massa massima autorizzata del complesso sia minore o uguale a 3500 kg; rimorchio con massa massima autorizzata è superiore a 750 kg a condizione che la massa massima autorizzata del complesso sia superiore a 3500 kg, ma non a 4250 Kg. In tal caso occorre superare una prova pratica di guida, su veicolo specifico, all'esito della quale è apposto sulla patente il codice 96. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM e B1; solo in Italia, veicoli di categoria A1 e, al compimento dei 21 anni di età, tricicli con potenza superiore a 15 kW.",
            BE => "È richiesta per la guida di complessi di veicoli composti da motrice di categoria B e rimorchio con massa massima autorizzata superiore a 750 kg ma minore o uguale a 3500 kg: ne deriva che la massa massima autorizzata del complesso è minore o uguale a 7000 kg. Questa patente si può conseguire a partire da 18 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1 e B; solo in Italia, veicoli di categoria A1 e, al compimento dei 21 anni di età, tricicli con potenza superiore a 15 kW.",
            C1 => "È richiesta per la guida di autocarri aventi massa massima autorizzata superiore a 3500 kg ma minore o uguale a 7500 kg, anche se trainanti un rimorchio con massa massima autorizzata minore o uguale a 750 kg. Questa patente si può conseguire a partire da 18 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1 e B; solo in Italia, veicoli di categoria A1 e, al compimento dei 21 anni di età, tricicli con potenza superiore a 15 kW",
            C1E => "È richiesta per la guida di complessi di veicoli composti da: motrice di categoria C1 e rimorchio con massa massima autorizzata superiore a 750 kg, purché la massa massima autorizzata del complesso sia minore o uguale a 12000 kg; motrice di categoria B e rimorchio con massa massima autorizzata superiore a 3500 kg, purché la massa massima autorizzata del complesso sia minore o uguale a 12000 kg. Questa patente si può conseguire a partire da 18 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1, B, BE e C1; solo in Italia, veicoli di categoria A1 e, al compimento dei 21 anni di età, tricicli con potenza superiore a 15 kW.",
            C => "È richiesta per la guida di autocarri aventi massa massima autorizzata superiore a 3500 kg, anche se trainanti un rimorchio con massa massima autorizzata minore o uguale a 750 kg. Questa patente si può conseguire a partire da 21 anni, fatta salva l'ipotesi che il candidato sia titolare di CQC per il trasporto di cose: in tal caso, il requisito anagrafico minimo è di 18. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1, B e C1; solo in Italia, veicoli di categoria A1 e, al compimento dei 21 anni di età, tricicli con potenza superiore a 15 kW.",
            CE => "È richiesta per la guida di complessi di veicoli composti da motrice di categoria C e rimorchio con massa massima autorizzata superiore a 750 kg. Questa patente si può conseguire a partire da 21 anni, fatta salva l'ipotesi che il candidato sia titolare di CQC per il trasporto di cose: in tal caso, il requisito anagrafico minimo è di 18 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1, B, BE, C1, C1E e C; solo in Italia, veicoli di categoria A1 e, al compimento dei 21 anni di età, tricicli con potenza superiore a 15 kW.",
            D1 => "È richiesta per la guida di autoveicoli con numero di posti minore o uguale a 17 e lunghezza minore o uguale a 8 metri, anche se trainanti un rimorchio con massa massima autorizzata minore o uguale a 750 kg. Questa patente si può conseguire a partire da 21 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1e B; solo in Italia, veicoli di categoria A1 e tricicli con potenza superiore a 15 kW.",
            D1E => "È richiesta per la guida di complessi di veicoli composti da motrice di categoria D1 e rimorchio con massa massima autorizzata superiore a 750 kg. Questa patente si può conseguire a partire da 21 anni. noltre posso guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1, B, BE e D1; solo in Italia, veicoli di categoria A1 e tricicli con potenza superiore a 15 kW.",
            D => "È richiesta per la guida di autoveicoli con numero di posti superiore a 9, anche se trainanti un rimorchio con massa massima autorizzata minore o uguale a 750 kg. Questa patente si può conseguire a partire da 24 anni, fatta salva l'ipotesi che il candidato sia titolare di CQC per il trasporto di persone: in tal caso, il requisito anagrafico minimo è di 21 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1, B e D1; solo in Italia, veicoli di categoria A1 e tricicli con potenza superiore a 15 kW.",
            DE => "È richiesta per la guida di complessi di veicoli composti da motrice di categoria D e rimorchio con massa massima autorizzata superiore a 750 kg. Questa patente si può conseguire a partire da 24 anni, fatta salva l'ipotesi che il candidato sia titolare di CQC per il trasporto di persone: in tal caso, il requisito anagrafico minimo è di 21 anni. Inoltre abilita a guidare in ambito UE e SEE tutti i veicoli di categoria AM, B1, B, BE, D1, D1E e D; solo in Italia, veicoli di categoria A1 e tricicli con potenza superiore a 15 kW.",
        }
    }
}

impl HasModel for DrivingLicenseCategories {
    type Record = DrivingLicenseCategory;
}

impl SeedDb for DrivingLicenseCategories {
    fn db_map(self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Integer(self.value())),
            ("code", Value::Text(self.name().to_string())),
            ("description", Value::Text(self.description().to_string())),
        ]
    }
}
