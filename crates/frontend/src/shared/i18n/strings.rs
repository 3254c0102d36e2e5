//! Bundled translation tables, keyed by dotted identifiers.

use super::Language;

/// Raw lookup. `None` for keys the tables do not carry.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::Fr => lookup_fr(key),
        Language::En => lookup_en(key),
    }
}

fn lookup_fr(key: &str) -> Option<&'static str> {
    Some(match key {
        "header.home" => "Accueil",
        "header.about" => "À propos",
        "header.logo_alt" => "Kasa, location d'appartements",
        "header.back_home" => "Retour à l'accueil",
        "header.nav_label" => "Navigation principale",
        "header.switch_language" => "Passer le site en anglais",
        "skip_link.label" => "Aller au contenu principal",
        "home.banner.text" => "Chez vous, partout et ailleurs",
        "home.banner.alt" => "Paysage côtier",
        "about.banner.alt" => "Paysage de montagne",
        "about.reliability.title" => "Fiabilité",
        "about.reliability.text" => {
            "Les annonces postées sur Kasa garantissent une fiabilité totale. \
             Les photos sont conformes aux logements, et toutes les informations \
             sont régulièrement vérifiées par nos équipes."
        }
        "about.respect.title" => "Respect",
        "about.respect.text" => {
            "La bienveillance fait partie des valeurs fondatrices de Kasa. Tout \
             comportement discriminatoire ou de perturbation du voisinage \
             entraînera une exclusion de notre plateforme."
        }
        "about.service.title" => "Service",
        "about.service.text" => {
            "La qualité du service est au cœur de notre engagement chez Kasa. \
             Nous veillons à ce que chaque interaction, que ce soit avec nos \
             hôtes ou nos locataires, soit empreinte de respect et de bienveillance."
        }
        "about.security.title" => "Sécurité",
        "about.security.text" => {
            "La sécurité est la priorité de Kasa. Aussi bien pour nos hôtes que \
             pour les voyageurs, chaque logement correspond aux critères de \
             sécurité établis par nos services."
        }
        "apart.description" => "Description",
        "apart.equipments" => "Équipements",
        "apart.host_picture_alt" => "Photo de l'hôte",
        "apart.not_found" => "Logement non trouvé",
        "apart.back_home" => "Retourner sur la page d'accueil",
        "slideshow.previous" => "Image précédente",
        "slideshow.next" => "Image suivante",
        "rating.label" => "Note du logement",
        "loading.label" => "Chargement en cours",
        "not_found.code" => "404",
        "not_found.message" => "Oups! La page que vous demandez n'existe pas.",
        "not_found.back_home" => "Retourner sur la page d'accueil",
        "footer.copyright" => "© 2020 Kasa. All rights reserved",
        _ => return None,
    })
}

fn lookup_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "header.home" => "Home",
        "header.about" => "About",
        "header.logo_alt" => "Kasa, apartment rentals",
        "header.back_home" => "Back to the home page",
        "header.nav_label" => "Main navigation",
        "header.switch_language" => "Switch the site to French",
        "skip_link.label" => "Skip to main content",
        "home.banner.text" => "Your home, everywhere and beyond",
        "home.banner.alt" => "Coastal landscape",
        "about.banner.alt" => "Mountain landscape",
        "about.reliability.title" => "Reliability",
        "about.reliability.text" => {
            "Listings posted on Kasa guarantee complete reliability. Photos \
             match the accommodations, and all information is regularly \
             verified by our teams."
        }
        "about.respect.title" => "Respect",
        "about.respect.text" => {
            "Kindness is one of Kasa's founding values. Any discriminatory \
             behavior or neighborhood disturbance leads to exclusion from our \
             platform."
        }
        "about.service.title" => "Service",
        "about.service.text" => {
            "Service quality is at the heart of our commitment at Kasa. We make \
             sure every interaction, with hosts and tenants alike, is marked by \
             respect and care."
        }
        "about.security.title" => "Security",
        "about.security.text" => {
            "Security is Kasa's priority. For our hosts as much as for \
             travelers, every accommodation meets the safety criteria set by \
             our services."
        }
        "apart.description" => "Description",
        "apart.equipments" => "Amenities",
        "apart.host_picture_alt" => "Host picture",
        "apart.not_found" => "Accommodation not found",
        "apart.back_home" => "Back to the home page",
        "slideshow.previous" => "Previous picture",
        "slideshow.next" => "Next picture",
        "rating.label" => "Listing rating",
        "loading.label" => "Loading",
        "not_found.code" => "404",
        "not_found.message" => "Oops! The page you are looking for does not exist.",
        "not_found.back_home" => "Back to the home page",
        "footer.copyright" => "© 2020 Kasa. All rights reserved",
        _ => return None,
    })
}
