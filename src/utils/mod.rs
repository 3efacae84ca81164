pub(crate) mod der;
