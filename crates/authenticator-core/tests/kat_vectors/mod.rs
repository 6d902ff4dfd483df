mod totp;
