//! Site copy in English and Italian.
//!
//! Every string shown to visitors is a [`Localized`] static, grouped by the
//! page it belongs to. Handlers resolve them for the active language through
//! label structs declared with [`labels!`].

use max_publishing_core::{Language, Localized};

/// Company registry data shown in the footer and on the about page.
#[derive(Debug)]
pub struct Company {
    pub name: &'static str,
    pub legal_form: Localized,
    pub registered_office: Localized,
    pub operational_office: Localized,
    pub vat_number: &'static str,
    pub fiscal_code: &'static str,
    pub rea_number: &'static str,
    pub share_capital: Localized,
    pub founded: Localized,
    pub email: &'static str,
}

pub static COMPANY: Company = Company {
    name: "MAX PUBLISHING SRL",
    legal_form: Localized::new(
        "Limited Liability Company",
        "Società a responsabilità limitata (SRL)",
    ),
    registered_office: Localized::new(
        "GREZZAGO (MI) VIA CAVOUR 50/D CAP 20056, Italy",
        "GREZZAGO (MI) VIA CAVOUR 50/D CAP 20056, Italia",
    ),
    operational_office: Localized::new(
        "VIA CAMILLO BENSO CAVOUR 50/D, 20056, Bologna, Italy",
        "VIA CAMILLO BENSO CAVOUR 50/D, 20056, Bologna, Italia",
    ),
    vat_number: "10750550963",
    fiscal_code: "10750550963",
    rea_number: "MI - 2555363",
    share_capital: Localized::new("€10,000.00", "€10.000,00"),
    founded: Localized::new("March 29, 2019", "29 marzo 2019"),
    email: "fanyuchengcc@gmail.com",
};

/// Company fields resolved for one language.
#[derive(Debug, Clone)]
pub struct CompanyView {
    pub name: &'static str,
    pub legal_form: &'static str,
    pub registered_office: &'static str,
    pub operational_office: &'static str,
    pub vat_number: &'static str,
    pub fiscal_code: &'static str,
    pub rea_number: &'static str,
    pub share_capital: &'static str,
    pub founded: &'static str,
    pub email: &'static str,
}

impl CompanyView {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            name: COMPANY.name,
            legal_form: COMPANY.legal_form.get(language),
            registered_office: COMPANY.registered_office.get(language),
            operational_office: COMPANY.operational_office.get(language),
            vat_number: COMPANY.vat_number,
            fiscal_code: COMPANY.fiscal_code,
            rea_number: COMPANY.rea_number,
            share_capital: COMPANY.share_capital.get(language),
            founded: COMPANY.founded.get(language),
            email: COMPANY.email,
        }
    }
}

/// Declare a label struct whose fields are statics resolved for one language.
///
/// ```ignore
/// labels!(CartLabels {
///     title => cart::TITLE,
///     empty => cart::EMPTY_TITLE,
/// });
/// let labels = CartLabels::new(Language::It);
/// ```
macro_rules! labels {
    ($name:ident { $($field:ident => $text:path),* $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            $(pub $field: &'static str,)*
        }

        impl $name {
            #[must_use]
            pub fn new(language: ::max_publishing_core::Language) -> Self {
                Self {
                    $($field: $text.get(language),)*
                }
            }
        }
    };
}

pub(crate) use labels;

macro_rules! texts {
    ($($group:ident { $($key:ident: $en:literal, $it:literal;)* })*) => {
        $(
            pub mod $group {
                use max_publishing_core::Localized;

                $(pub static $key: Localized = Localized::new($en, $it);)*
            }
        )*

        static TEXT_TABLE: &[(&str, &Localized)] = &[
            $($((concat!(stringify!($group), ".", stringify!($key)), &$group::$key),)*)*
        ];
    };
}

texts! {
    nav {
        HOME: "Home", "Home";
        ABOUT: "About Us", "Chi Siamo";
        SERVICES: "Services", "Servizi";
        BOOKS: "Books", "Libri";
        CATEGORIES: "Categories", "Categorie";
        CONTACT: "Contact Us", "Contattaci";
        CART: "Cart", "Carrello";
        PROFILE: "Profile", "Profilo";
        LANGUAGE: "Language", "Lingua";
        MAIN_MENU: "Main navigation", "Navigazione principale";
    }

    theme {
        TOGGLE: "Theme", "Tema";
        LIGHT: "Light", "Chiaro";
        DARK: "Dark", "Scuro";
        SYSTEM: "System", "Sistema";
    }

    footer {
        COMPANY_INFO: "Company Information", "Informazioni Aziendali";
        REGISTERED_OFFICE: "Registered Office", "Sede Legale";
        OPERATIONAL_OFFICE: "Operational Office", "Sede Operativa";
        VAT_NUMBER: "VAT Number", "Partita IVA";
        REA_NUMBER: "REA Number", "Numero REA";
        SHARE_CAPITAL: "Share Capital", "Capitale Sociale";
        SERVICES: "Our Services", "I Nostri Servizi";
        CONTACT: "Contact", "Contatti";
        RIGHTS_RESERVED: "All rights reserved.", "Tutti i diritti riservati.";
        PRIVACY: "Privacy Policy", "Informativa sulla Privacy";
        TERMS: "Terms of Service", "Termini di Servizio";
    }

    common {
        LEARN_MORE: "Learn More", "Scopri di più";
        VIEW_DETAILS: "View Details", "Vedi Dettagli";
        SUBMIT: "Submit", "Invia";
        GET_QUOTE: "Get a Quote", "Richiedi un Preventivo";
        REQUEST_CONSULTATION: "Request a Consultation", "Richiedi una Consulenza";
        BACK_TO_HOME: "Back to Home", "Torna alla Home";
        ADD_TO_CART: "Add to Cart", "Aggiungi al Carrello";
        NEW: "New", "Novità";
        BESTSELLER: "Bestseller", "Bestseller";
        REVIEWS: "reviews", "recensioni";
        BY: "by", "di";
        SAVE: "Save", "Risparmia";
    }

    home {
        META_TITLE: "MAX PUBLISHING SRL | Strategic Publishing Solutions", "MAX PUBLISHING SRL | Soluzioni Editoriali Strategiche";
        HERO_TITLE: "Your Strategic Partner in Publishing Solutions", "Il Tuo Partner Strategico nelle Soluzioni Editoriali";
        HERO_TAGLINE: "MAX PUBLISHING SRL: Delivering specialized publishing services, bulk fulfillment, and rights management for businesses and institutions.", "MAX PUBLISHING SRL: Forniamo servizi editoriali specializzati, vendite all'ingrosso e gestione dei diritti per aziende e istituzioni.";
        EXPLORE_SERVICES: "Explore Our Services", "Esplora i Nostri Servizi";
        CONSULTATION_SUBJECT: "Consultation Request from Website", "Richiesta di Consulenza dal Sito Web";
        WHY_TITLE: "Why Choose MAX PUBLISHING SRL", "Perché Scegliere MAX PUBLISHING SRL";
        WHY_EXPERTISE: "Proven B2B Expertise: Over 5 years of specialized publishing solutions for businesses", "Esperienza B2B Comprovata: Oltre 5 anni di soluzioni editoriali specializzate per le aziende";
        WHY_TAILORED: "Tailored Solutions: Customized services to meet your specific publishing needs", "Soluzioni Su Misura: Servizi personalizzati per soddisfare le vostre specifiche esigenze editoriali";
        WHY_QUALITY: "Quality Commitment: Excellence in every project, from concept to delivery", "Impegno per la Qualità: Eccellenza in ogni progetto, dal concept alla consegna";
        WHY_PARTNERSHIP: "Reliable Partnership: Trusted by leading businesses and institutions", "Partnership Affidabile: Di fiducia per aziende e istituzioni leader";
        NEW_RELEASES: "New Releases", "Novità in Libreria";
        BESTSELLERS: "Bestsellers", "I Più Venduti";
        VIEW_ALL_BOOKS: "View all books", "Vedi tutti i libri";
        CTA_TITLE: "Ready to Start Your Publishing Project?", "Pronto per Iniziare il Tuo Progetto Editoriale?";
        CTA_TEXT: "Contact our team today to discuss how we can help bring your publishing vision to life.", "Contatta il nostro team oggi per discutere come possiamo aiutarti a realizzare la tua visione editoriale.";
    }

    about {
        META_TITLE: "About MAX PUBLISHING SRL", "Chi Siamo - MAX PUBLISHING SRL";
        HEADER_TITLE: "About Us", "Chi Siamo";
        PROFILE_TITLE: "Company Profile", "Profilo Aziendale";
        PROFILE_CONTENT: "Founded in March 29, 2019, MAX PUBLISHING SRL has established itself as a reliable partner for businesses seeking professional publishing solutions. Based in Bologna, Italy, we combine traditional publishing expertise with modern digital capabilities to deliver comprehensive services that meet the evolving needs of our B2B clients.", "Fondata il 29 marzo 2019, MAX PUBLISHING SRL si è affermata come partner affidabile per le aziende che cercano soluzioni editoriali professionali. Con sede a Bologna, Italia, combiniamo l'esperienza editoriale tradizionale con le moderne capacità digitali per fornire servizi completi che soddisfano le esigenze in evoluzione dei nostri clienti B2B.";
        MISSION_TITLE: "Our Mission", "La Nostra Missione";
        MISSION_CONTENT: "To provide innovative and tailored publishing solutions that empower businesses and institutions to communicate effectively with their audiences through high-quality printed and digital content.", "Fornire soluzioni editoriali innovative e su misura che consentano ad aziende e istituzioni di comunicare efficacemente con il loro pubblico attraverso contenuti stampati e digitali di alta qualità.";
        VISION_TITLE: "Our Vision", "La Nostra Visione";
        VISION_CONTENT: "To be the leading B2B publishing partner in Europe, recognized for our commitment to quality, innovation, and exceptional service in the publishing industry.", "Essere il partner editoriale B2B leader in Europa, riconosciuti per il nostro impegno verso la qualità, l'innovazione e il servizio eccezionale nel settore editoriale.";
        B2B_TITLE: "B2B Publishing Expertise", "Esperienza nell'Editoria B2B";
        B2B_CONTENT: "We specialize in serving corporate clients, educational institutions, and government organizations with customized publishing solutions. Our expertise spans from technical manuals and corporate publications to educational materials and bulk book orders, always maintaining the highest standards of quality and professionalism.", "Siamo specializzati nel servire clienti aziendali, istituzioni educative e organizzazioni governative con soluzioni editoriali personalizzate. La nostra esperienza spazia dai manuali tecnici e pubblicazioni aziendali ai materiali didattici e ordini di libri all'ingrosso, mantenendo sempre i più alti standard di qualità e professionalità.";
        FACTS_TITLE: "Company Facts", "Dati Aziendali";
        LEGAL_FORM: "Legal Form", "Forma Giuridica";
        FOUNDED: "Founded", "Data di Costituzione";
        FISCAL_CODE: "Fiscal Code", "Codice Fiscale";
    }

    services {
        META_TITLE: "Our B2B Publishing Services | MAX PUBLISHING SRL", "I Nostri Servizi Editoriali B2B | MAX PUBLISHING SRL";
        HEADER_TITLE: "Our Services", "I Nostri Servizi";
        INTRO: "MAX PUBLISHING SRL offers a comprehensive suite of B2B publishing services designed to meet the diverse needs of businesses, institutions, and organizations. From concept to distribution, we provide end-to-end solutions that ensure your publishing projects succeed.", "MAX PUBLISHING SRL offre una suite completa di servizi editoriali B2B progettati per soddisfare le diverse esigenze di aziende, istituzioni e organizzazioni. Dal concept alla distribuzione, forniamo soluzioni end-to-end che garantiscono il successo dei vostri progetti editoriali.";

        PUBLISHING_TITLE: "Publishing Services", "Servizi Editoriali";
        PUBLISHING_SHORT: "Publishing Services", "Servizi Editoriali";
        PUBLISHING_SUMMARY: "From manuscript to market, we provide end-to-end editorial and production services.", "Dal manoscritto al mercato, forniamo servizi editoriali e di produzione end-to-end.";
        PUBLISHING_INTRO: "MAX PUBLISHING SRL offers comprehensive publishing solutions tailored to meet the unique needs of businesses and organizations. Our expert team guides you through every stage of the publishing process, ensuring exceptional results that align with your goals.", "MAX PUBLISHING SRL offre soluzioni editoriali complete su misura per soddisfare le esigenze uniche di aziende e organizzazioni. Il nostro team di esperti vi guida attraverso ogni fase del processo editoriale, garantendo risultati eccezionali allineati ai vostri obiettivi.";
        CUSTOM_TITLE: "Custom Publishing & Bespoke Projects", "Editoria Personalizzata e Progetti Su Misura";
        CUSTOM_TEXT: "Tailored publishing solutions for corporate histories, annual reports, branded content, and special projects that reflect your organization's unique identity and objectives.", "Soluzioni editoriali su misura per storie aziendali, relazioni annuali, contenuti di marca e progetti speciali che riflettono l'identità e gli obiettivi unici della vostra organizzazione.";
        EDITORIAL_TITLE: "Editorial & Production Services", "Servizi Editoriali e di Produzione";
        EDITORIAL_TEXT: "Complete editorial services including manuscript evaluation, developmental editing, copyediting, proofreading, design, typesetting, and print production management.", "Servizi editoriali completi inclusi valutazione del manoscritto, editing di sviluppo, copyediting, correzione di bozze, design, impaginazione e gestione della produzione di stampa.";
        TRANSLATION_TITLE: "Translation & Localization", "Traduzione e Localizzazione";
        TRANSLATION_TEXT: "Professional translation services for books, manuals, and corporate publications. We ensure cultural appropriateness and maintain the original tone and intent across languages.", "Servizi di traduzione professionale per libri, manuali e pubblicazioni aziendali. Garantiamo l'appropriatezza culturale e manteniamo il tono e l'intento originali attraverso le lingue.";
        CONTENT_DEV_TITLE: "Content Development & Corporate Publishing", "Sviluppo Contenuti ed Editoria Aziendale";
        CONTENT_DEV_TEXT: "Strategic content creation for training materials, technical documentation, marketing collateral, and thought leadership publications that enhance your brand authority.", "Creazione strategica di contenuti per materiali di formazione, documentazione tecnica, materiale di marketing e pubblicazioni di thought leadership che migliorano l'autorità del vostro marchio.";
        PUBLISHING_CTA: "Request a Quote for Publishing Services", "Richiedi un Preventivo per Servizi Editoriali";
        PUBLISHING_SUBJECT: "Quote Request: Publishing Services", "Richiesta Preventivo: Servizi Editoriali";

        BULK_TITLE: "Bulk & Corporate Sales", "Vendite all'Ingrosso e Aziendali";
        BULK_SHORT: "Bulk & Corporate Sales", "Vendite all'Ingrosso";
        BULK_SUMMARY: "Volume purchasing solutions for businesses, educational institutions, and organizations.", "Soluzioni di acquisto in volume per aziende, istituzioni educative e organizzazioni.";
        BULK_INTRO: "MAX PUBLISHING SRL provides flexible bulk purchasing options for businesses, educational institutions, libraries, and organizations. Whether you need books for corporate training, educational programs, or promotional purposes, we offer competitive pricing and customized solutions.", "MAX PUBLISHING SRL fornisce opzioni di acquisto all'ingrosso flessibili per aziende, istituzioni educative, biblioteche e organizzazioni. Che abbiate bisogno di libri per formazione aziendale, programmi educativi o scopi promozionali, offriamo prezzi competitivi e soluzioni personalizzate.";
        BULK_BENEFITS: "Key Benefits", "Vantaggi Principali";
        BULK_PRICING: "Competitive Pricing: Significant discounts on volume orders with flexible pricing tiers", "Prezzi Competitivi: Sconti significativi sugli ordini in volume con livelli di prezzo flessibili";
        BULK_ACCOUNT: "Dedicated Account Management: Personal support throughout the ordering and fulfillment process", "Gestione Account Dedicata: Supporto personale durante tutto il processo di ordine e consegna";
        BULK_CUSTOM: "Customized Solutions: Branded covers, special editions, and custom packaging options", "Soluzioni Personalizzate: Copertine brandizzate, edizioni speciali e opzioni di packaging personalizzato";
        BULK_FULFILLMENT: "Efficient Fulfillment: Streamlined logistics for timely delivery to single or multiple locations", "Consegna Efficiente: Logistica ottimizzata per consegne puntuali a singole o multiple destinazioni";
        BULK_CTA: "Get a Quote for Your Bulk Order", "Richiedi un Preventivo per il Tuo Ordine all'Ingrosso";
        BULK_SUBJECT: "Quote Request: Bulk Order", "Richiesta Preventivo: Ordine all'Ingrosso";

        RIGHTS_TITLE: "Rights & Licensing", "Diritti e Licenze";
        RIGHTS_SHORT: "Rights & Licensing", "Diritti e Licenze";
        RIGHTS_SUMMARY: "Comprehensive rights management and licensing services for publishers and content owners.", "Servizi completi di gestione dei diritti e licenze per editori e proprietari di contenuti.";
        RIGHTS_INTRO: "MAX PUBLISHING SRL offers expert rights management and licensing services to help publishers, authors, and content owners maximize the value of their intellectual property. We facilitate rights transactions across multiple formats, languages, and territories.", "MAX PUBLISHING SRL offre servizi esperti di gestione dei diritti e licenze per aiutare editori, autori e proprietari di contenuti a massimizzare il valore della loro proprietà intellettuale. Facilitiamo transazioni di diritti attraverso molteplici formati, lingue e territori.";
        RIGHTS_TRANSLATION_TITLE: "Translation Rights", "Diritti di Traduzione";
        RIGHTS_TRANSLATION_TEXT: "Management of translation rights for books and content across multiple languages and territories, ensuring maximum reach and revenue potential.", "Gestione dei diritti di traduzione per libri e contenuti attraverso molteplici lingue e territori, garantendo massima portata e potenziale di ricavo.";
        REPRINT_TITLE: "Reprint Permissions", "Permessi di Ristampa";
        REPRINT_TEXT: "Handling reprint and excerpt permissions for academic, educational, and commercial use, with clear licensing terms and efficient processing.", "Gestione dei permessi di ristampa ed estratti per uso accademico, educativo e commerciale, con termini di licenza chiari ed elaborazione efficiente.";
        DIGITAL_TITLE: "Digital Licensing", "Licenze Digitali";
        DIGITAL_TEXT: "E-book, audiobook, and digital content licensing arrangements for various platforms and distribution channels.", "Accordi di licenza per e-book, audiolibri e contenuti digitali per varie piattaforme e canali di distribuzione.";
        TERRITORIAL_TITLE: "Territorial Rights", "Diritti Territoriali";
        TERRITORIAL_TEXT: "Strategic management of geographical rights to optimize market coverage and prevent conflicts between different editions.", "Gestione strategica dei diritti geografici per ottimizzare la copertura del mercato e prevenire conflitti tra diverse edizioni.";
        ADAPTATION_TITLE: "Adaptation Rights", "Diritti di Adattamento";
        ADAPTATION_TEXT: "Licensing for adaptations including film, television, theater, and other media formats, maximizing content value across platforms.", "Licenze per adattamenti inclusi film, televisione, teatro e altri formati multimediali, massimizzando il valore dei contenuti attraverso le piattaforme.";
        RIGHTS_CTA: "Inquire About Rights & Licensing", "Informazioni su Diritti e Licenze";
        RIGHTS_SUBJECT: "Inquiry: Rights & Licensing", "Richiesta: Diritti e Licenze";
    }

    books {
        META_TITLE: "Books | MAX PUBLISHING SRL", "Libri | MAX PUBLISHING SRL";
        TITLE: "Our Books", "I Nostri Libri";
        INTRO: "Browse our catalog of timeless classics.", "Sfoglia il nostro catalogo di classici senza tempo.";
        FILTERS: "Filters", "Filtri";
        SEARCH: "Search", "Cerca";
        SEARCH_PLACEHOLDER: "Title or author", "Titolo o autore";
        CATEGORY: "Category", "Categoria";
        ALL_CATEGORIES: "All categories", "Tutte le categorie";
        PRICE_RANGE: "Price range (€)", "Fascia di prezzo (€)";
        MIN_PRICE: "Min", "Min";
        MAX_PRICE: "Max", "Max";
        SORT_BY: "Sort by", "Ordina per";
        SORT_TITLE: "Title", "Titolo";
        SORT_AUTHOR: "Author", "Autore";
        SORT_PRICE: "Price: low to high", "Prezzo: dal più basso";
        SORT_RATING: "Highest rated", "Più votati";
        VIEW: "View", "Vista";
        GRID: "Grid", "Griglia";
        LIST: "List", "Elenco";
        APPLY: "Apply", "Applica";
        RESET: "Reset filters", "Azzera filtri";
        RESULTS: "books found", "libri trovati";
        NO_RESULTS: "No books match your filters.", "Nessun libro corrisponde ai filtri selezionati.";
    }

    categories {
        META_TITLE: "Categories | MAX PUBLISHING SRL", "Categorie | MAX PUBLISHING SRL";
        TITLE: "Browse by Category", "Sfoglia per Categoria";
        INTRO: "Find your next read in the genre you love.", "Trova la tua prossima lettura nel genere che ami.";
        ALL: "All", "Tutti";
        BOOKS_COUNT: "books", "libri";
        EMPTY: "There are no books in this category yet.", "Non ci sono ancora libri in questa categoria.";
    }

    category {
        CLASSICS: "Classics", "Classici";
        POETRY: "Poetry", "Poesia";
        SCIENCE_FICTION: "Science Fiction", "Fantascienza";
        MYSTERY: "Mystery", "Gialli";
        PHILOSOPHY: "Philosophy", "Filosofia";
    }

    book {
        BACK_TO_BOOKS: "Back to Books", "Torna ai Libri";
        DESCRIPTION: "Description", "Descrizione";
        DETAILS: "Details", "Dettagli";
        AUTHOR: "Author", "Autore";
        CATEGORY: "Category", "Categoria";
        PUBLISHED: "First published", "Prima pubblicazione";
        QUANTITY: "Quantity", "Quantità";
        RELATED: "You may also like", "Potrebbe piacerti anche";
        FREE_SHIPPING: "Free shipping on all orders", "Spedizione gratuita su tutti gli ordini";
        RETURNS: "30-day return policy", "Reso entro 30 giorni";
        NOT_FOUND_TITLE: "Book not found", "Libro non trovato";
        NOT_FOUND_TEXT: "The book you are looking for is not in our catalog.", "Il libro che cerchi non è nel nostro catalogo.";
        ADD_TO_WISHLIST: "Add to Wishlist", "Aggiungi ai desideri";
        IN_WISHLIST: "In Wishlist", "Nei desideri";
        SHARE: "Share", "Condividi";
        SHARE_SUBJECT: "Check out this book", "Guarda questo libro";
    }

    cart {
        META_TITLE: "Shopping Cart | MAX PUBLISHING SRL", "Carrello | MAX PUBLISHING SRL";
        TITLE: "Shopping Cart", "Carrello";
        EMPTY_TITLE: "Your cart is empty", "Il tuo carrello è vuoto";
        EMPTY_TEXT: "Looks like you haven't added any books to your cart yet. Start exploring our collection!", "Sembra che tu non abbia ancora aggiunto libri al carrello. Inizia a esplorare la nostra collezione!";
        BROWSE: "Browse Books", "Sfoglia i Libri";
        CONTINUE: "Continue Shopping", "Continua gli Acquisti";
        SUMMARY: "Order Summary", "Riepilogo Ordine";
        SUBTOTAL: "Subtotal", "Subtotale";
        ITEMS: "items", "articoli";
        SHIPPING: "Shipping", "Spedizione";
        FREE: "Free", "Gratuita";
        TOTAL: "Total", "Totale";
        CHECKOUT: "Proceed to Checkout", "Procedi al Pagamento";
        CHECKOUT_NOTE: "You will be redirected to our payment partner.", "Verrai reindirizzato al nostro partner di pagamento.";
        CLEAR: "Clear cart", "Svuota carrello";
        REMOVE: "Remove", "Rimuovi";
        INCREASE: "Increase quantity", "Aumenta quantità";
        DECREASE: "Decrease quantity", "Diminuisci quantità";
        FREE_SHIPPING: "Free shipping on all orders", "Spedizione gratuita su tutti gli ordini";
        RETURNS: "30-day return policy", "Reso entro 30 giorni";
    }

    contact {
        META_TITLE: "Contact Us | MAX PUBLISHING SRL", "Contattaci | MAX PUBLISHING SRL";
        HEADER_TITLE: "Contact Us", "Contattaci";
        DESCRIPTION: "We'd love to hear from you. Send us a message and we'll respond as soon as possible.", "Ci piacerebbe sentirti. Inviaci un messaggio e ti risponderemo il prima possibile.";
        FORM_TITLE: "Send us a Message", "Inviaci un Messaggio";
        NAME_LABEL: "Name", "Nome";
        NAME_PLACEHOLDER: "Your full name", "Il tuo nome completo";
        EMAIL_LABEL: "Email", "Email";
        EMAIL_PLACEHOLDER: "your.email@example.com", "tua.email@esempio.com";
        COMPANY_LABEL: "Company (Optional)", "Azienda (Opzionale)";
        COMPANY_PLACEHOLDER: "Your company name", "Nome della tua azienda";
        SUBJECT_LABEL: "Subject", "Oggetto";
        SELECT_SUBJECT: "Select a subject", "Seleziona un oggetto";
        SUBJECT_GENERAL: "General Inquiry", "Richiesta Generale";
        SUBJECT_PUBLISHING: "Publishing Services", "Servizi Editoriali";
        SUBJECT_BULK: "Bulk Orders", "Ordini all'Ingrosso";
        SUBJECT_RIGHTS: "Rights & Licensing", "Diritti e Licenze";
        SUBJECT_PARTNERSHIP: "Partnership Opportunities", "Opportunità di Partnership";
        SUBJECT_OTHER: "Other", "Altro";
        MESSAGE_LABEL: "Message", "Messaggio";
        MESSAGE_PLACEHOLDER: "Please describe your inquiry in detail...", "Descrivi la tua richiesta in dettaglio...";
        SUBMIT: "Send Message", "Invia Messaggio";
        EMAIL_SUBJECT: "Website Inquiry", "Richiesta dal Sito Web";
        MAILTO_DISCLAIMER: "Your message will be prepared as an email that you send from your own mail application.", "Il tuo messaggio verrà preparato come email da inviare con la tua applicazione di posta.";
        INFO_TITLE: "Get in Touch", "Mettiti in Contatto";
        GENERAL_EMAIL_TITLE: "General Inquiries", "Richieste Generali";
        GENERAL_EMAIL_TEXT: "For all inquiries and information", "Per informazioni e richieste di carattere generale";
        REGISTERED_OFFICE: "Registered Office", "Sede Legale";
        OPERATIONAL_OFFICE: "Operational Office", "Sede Operativa";
        ERRORS_TITLE: "Please correct the highlighted fields.", "Correggi i campi evidenziati.";
        ERROR_NAME: "Please enter your name.", "Inserisci il tuo nome.";
        ERROR_EMAIL: "Please enter a valid email address.", "Inserisci un indirizzo email valido.";
        ERROR_SUBJECT: "Please select a subject.", "Seleziona un oggetto.";
        ERROR_MESSAGE: "Please enter a message.", "Inserisci un messaggio.";
        SUCCESS_TITLE: "Thank you for your message!", "Grazie per il tuo messaggio!";
        SUCCESS_TEXT: "Your request is ready. Open it in your email application to send it to our team.", "La tua richiesta è pronta. Aprila nella tua applicazione email per inviarla al nostro team.";
        OPEN_EMAIL: "Open in email app", "Apri nell'app email";
        MAIL_NAME: "Name", "Nome";
        MAIL_EMAIL: "Email", "Email";
        MAIL_COMPANY: "Company", "Azienda";
    }

    profile {
        META_TITLE: "My Profile | MAX PUBLISHING SRL", "Il Mio Profilo | MAX PUBLISHING SRL";
        TITLE: "My Profile", "Il Mio Profilo";
        SIGN_IN_TITLE: "Please sign in to view your profile", "Accedi per visualizzare il tuo profilo";
        SIGN_IN_TEXT: "Enter your name and email. Your profile is kept only for this browsing session.", "Inserisci nome ed email. Il profilo viene conservato solo per questa sessione di navigazione.";
        NAME: "Name", "Nome";
        EMAIL: "Email", "Email";
        PHONE: "Phone", "Telefono";
        ADDRESS: "Address", "Indirizzo";
        SIGN_IN: "Sign in", "Accedi";
        SIGN_OUT: "Sign out", "Esci";
        MEMBER_SINCE: "Member since", "Membro dal";
        EDIT: "Edit profile", "Modifica profilo";
        SAVE: "Save changes", "Salva modifiche";
        NOT_PROVIDED: "Not provided", "Non indicato";
        CART_SUMMARY: "Books in your cart", "Libri nel carrello";
        VIEW_CART: "View cart", "Vedi carrello";
        SAVED: "Your profile has been updated.", "Il tuo profilo è stato aggiornato.";
        ERROR_NAME: "Please enter your name.", "Inserisci il tuo nome.";
        ERROR_EMAIL: "Please enter a valid email address.", "Inserisci un indirizzo email valido.";
        WISHLIST_TITLE: "My Wishlist", "I Miei Desideri";
        WISHLIST_EMPTY: "Your wishlist is empty", "La tua lista dei desideri è vuota";
        BROWSE_BOOKS: "Browse Books", "Sfoglia i Libri";
        REMOVE: "Remove", "Rimuovi";
    }

    legal {
        LAST_UPDATED: "Last updated", "Ultimo aggiornamento";
    }

    errors {
        NOT_FOUND_META: "Page not found | MAX PUBLISHING SRL", "Pagina non trovata | MAX PUBLISHING SRL";
        NOT_FOUND_TITLE: "Page not found", "Pagina non trovata";
        NOT_FOUND_TEXT: "The page you are looking for does not exist or has been moved.", "La pagina che cerchi non esiste o è stata spostata.";
    }
}

/// Every localized string on the site with a dotted key such as
/// `nav.HOME`, including the company data.
#[must_use]
pub fn all_texts() -> Vec<(&'static str, &'static Localized)> {
    let company: [(&'static str, &'static Localized); 5] = [
        ("company.legal_form", &COMPANY.legal_form),
        ("company.registered_office", &COMPANY.registered_office),
        ("company.operational_office", &COMPANY.operational_office),
        ("company.share_capital", &COMPANY.share_capital),
        ("company.founded", &COMPANY.founded),
    ];
    TEXT_TABLE.iter().copied().chain(company).collect()
}

/// Keys of strings missing a translation.
#[must_use]
pub fn incomplete_texts() -> Vec<&'static str> {
    all_texts()
        .into_iter()
        .filter(|(_, text)| !text.is_complete())
        .map(|(key, _)| key)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    labels!(TestLabels {
        home => nav::HOME,
        about => nav::ABOUT,
    });

    #[test]
    fn test_all_texts_complete() {
        assert!(incomplete_texts().is_empty(), "{:?}", incomplete_texts());
    }

    #[test]
    fn test_all_texts_keys_unique() {
        let texts = all_texts();
        let keys: HashSet<_> = texts.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), texts.len());
        assert!(keys.contains("nav.HOME"));
        assert!(keys.contains("company.founded"));
    }

    #[test]
    fn test_labels_resolve_language() {
        let en = TestLabels::new(Language::En);
        let it = TestLabels::new(Language::It);
        assert_eq!(en.about, "About Us");
        assert_eq!(it.about, "Chi Siamo");
        assert_eq!(it.home, "Home");
    }

    #[test]
    fn test_company_view() {
        let view = CompanyView::new(Language::It);
        assert_eq!(view.name, "MAX PUBLISHING SRL");
        assert_eq!(view.share_capital, "€10.000,00");
        assert_eq!(view.vat_number, "10750550963");
    }
}
