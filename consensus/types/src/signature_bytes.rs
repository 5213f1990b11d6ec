use crate::SIGNATURE_BYTES_LEN;

bytes_struct!(SignatureBytes, SIGNATURE_BYTES_LEN, "signature");
