use crate::PUBLIC_KEY_BYTES_LEN;

bytes_struct!(PublicKeyBytes, PUBLIC_KEY_BYTES_LEN, "public key");
