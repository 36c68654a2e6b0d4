// file: src/labels/dublin_core.rs
// description: built-in display labels for dublin core and repository fields

/// `(field, label)` pairs, in the order they are listed to users.
pub const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("dc.title", "Título"),
    ("dc.title.translated", "Título Traducido"),
    ("dc.contributor.author", "Autor(es)"),
    ("dc.contributor.advisor", "Director(es)"),
    ("dc.contributor.editor", "Editor(es)"),
    ("dc.description", "Descripción"),
    ("dc.description.abstract", "Resumen"),
    ("dc.identifier.uri", "URI"),
    ("dc.identifier.url", "URL"),
    ("dc.identifier.doi", "DOI"),
    ("dc.identifier.eissn", "EISSN"),
    ("dc.identifier.issn", "ISSN"),
    ("dc.date.issued", "Fecha de Publicación"),
    ("dc.date.accessioned", "Fecha de Acceso"),
    ("dc.date.available", "Fecha Disponible"),
    ("dc.publisher", "Editorial"),
    ("dc.publisher.program", "Programa Académico"),
    ("dc.publisher.faculty", "Facultad"),
    ("dc.subject", "Palabras Clave"),
    ("dc.subject.ods", "ODS"),
    ("dc.language.iso", "Idioma"),
    ("dc.format.mimetype", "Formato"),
    ("dc.type", "Tipo de Documento"),
    ("dc.type.coar", "Tipo COAR"),
    ("dc.type.coarversion", "Versión COAR"),
    ("dc.type.content", "Tipo de Contenido"),
    ("dc.type.driver", "Tipo Driver"),
    ("dc.type.local", "Tipo Local"),
    ("dc.type.redcol", "Tipo RedCol"),
    ("dc.type.version", "Versión"),
    ("dc.rights", "Derechos"),
    ("dc.rights.accessrights", "Derechos de Acceso"),
    ("dc.rights.coar", "Derechos COAR"),
    ("dc.rights.uri", "URI de Derechos"),
    ("dc.source", "Fuente"),
    ("dc.relation.bitstream", "Bitstream"),
    ("dc.relation.citationedition", "Edición"),
    ("dc.relation.citationendpage", "Página Final"),
    ("dc.relation.citationissue", "Número"),
    ("dc.relation.citationstartpage", "Página Inicial"),
    ("dc.relation.ispartofjournal", "Revista"),
    ("dc.relation.references", "Referencias"),
    ("dspace.entity.type", "Tipo de Entidad"),
];
