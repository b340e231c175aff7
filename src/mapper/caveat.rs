use crate::comments::extract_comment;
use crate::ir::CaveatDefinition;
use crate::options::ExportOptions;
use crate::types::Caveat;

pub fn map_caveat(caveat: &CaveatDefinition, options: &ExportOptions) -> Caveat {
    Caveat {
        name: caveat.name.clone(),
        parameters: caveat.parameter_types.clone(),
        comment: extract_comment(&caveat.metadata, &options.doc_comment_type_url),
    }
}
